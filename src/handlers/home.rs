// src/handlers/home.rs

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode, header::SET_COOKIE},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Serialize;
use serde_json::json;
use tera::Context;

use crate::{
    config::Config,
    db,
    error::{AppError, FieldErrors},
    models::{
        feedback::FeedbackForm, profile::Profile, project::Project, publication::Publication,
        video::Video,
    },
    state::AppState,
    utils::{
        flash::{Flash, clear_cookie_header},
        form_body::FormBody,
        html::clean_html,
        request_kind::RequestKind,
    },
};

pub const FEEDBACK_THANKS: &str = "Thank you for your feedback!";
pub const FEEDBACK_FIX_ERRORS: &str = "Please correct the errors below.";

#[derive(Debug, Serialize)]
struct ProfileView {
    name: String,
    bio_html: String,
    photo_url: Option<String>,
    resume_url: Option<String>,
    twitter: Option<String>,
    facebook: Option<String>,
    linkedin: Option<String>,
    instagram: Option<String>,
}

impl ProfileView {
    fn new(profile: Profile, config: &Config) -> Self {
        Self {
            bio_html: clean_html(&profile.bio),
            photo_url: profile.photo.as_deref().map(|p| config.media_path_url(p)),
            resume_url: profile.resume.as_deref().map(|p| config.media_path_url(p)),
            name: profile.name,
            twitter: profile.twitter,
            facebook: profile.facebook,
            linkedin: profile.linkedin,
            instagram: profile.instagram,
        }
    }
}

#[derive(Debug, Serialize)]
struct PublicationView {
    title: String,
    description_html: Option<String>,
    journal: Option<String>,
    date: String,
    link: Option<String>,
    image_url: Option<String>,
    tags: Vec<String>,
}

impl PublicationView {
    fn new(publication: Publication, config: &Config) -> Self {
        Self {
            tags: publication.tags_list(),
            description_html: publication.description.as_deref().map(clean_html),
            date: publication.date.format("%B %-d, %Y").to_string(),
            image_url: publication.image.as_deref().map(|p| config.media_path_url(p)),
            title: publication.title,
            journal: publication.journal,
            link: publication.link,
        }
    }
}

#[derive(Debug, Serialize)]
struct ProjectView {
    title: String,
    description_html: String,
    image_url: Option<String>,
    link: Option<String>,
    languages: Vec<String>,
}

impl ProjectView {
    fn new(project: Project, config: &Config) -> Self {
        Self {
            languages: project.languages_list(),
            description_html: clean_html(&project.description),
            image_url: project.image.as_deref().map(|p| config.media_path_url(p)),
            title: project.title,
            link: project.link,
        }
    }
}

#[derive(Debug, Serialize)]
struct VideoView {
    title: String,
    url: String,
    description: String,
    youtube_id: Option<String>,
}

impl From<Video> for VideoView {
    fn from(video: Video) -> Self {
        Self {
            youtube_id: video.youtube_id(),
            title: video.title,
            url: video.url,
            description: video.description,
        }
    }
}

/// Echo of the submitted form, so a rejected submission keeps its values.
#[derive(Debug, Default, Serialize)]
struct FormView {
    name: String,
    email: String,
    whatsapp: String,
    message: String,
}

impl From<&FeedbackForm> for FormView {
    fn from(form: &FeedbackForm) -> Self {
        Self {
            name: form.name.clone().unwrap_or_default(),
            email: form.email.clone().unwrap_or_default(),
            whatsapp: form.whatsapp.clone().unwrap_or_default(),
            message: form.message.clone().unwrap_or_default(),
        }
    }
}

/// Renders the home page with every content section and the feedback form.
async fn render_home(
    state: &AppState,
    form: &FeedbackForm,
    errors: &FieldErrors,
    flash: Option<&Flash>,
) -> Result<Html<String>, AppError> {
    let pool = &state.pool;
    let (profile, publications, projects, skills, educations, videos) = tokio::try_join!(
        db::profile::get_or_default(pool),
        db::publications::list_all(pool),
        db::projects::list_all(pool),
        db::skills::list_all(pool),
        db::educations::list_all(pool),
        db::videos::list_all(pool),
    )?;

    log_media_references(&profile, &publications, &projects, &videos);

    let config = &state.config;
    let publications: Vec<PublicationView> = publications
        .into_iter()
        .map(|p| PublicationView::new(p, config))
        .collect();
    let projects: Vec<ProjectView> = projects
        .into_iter()
        .map(|p| ProjectView::new(p, config))
        .collect();
    let videos: Vec<VideoView> = videos.into_iter().map(VideoView::from).collect();

    let mut context = Context::new();
    context.insert("profile", &ProfileView::new(profile, config));
    context.insert("publications", &publications);
    context.insert("projects", &projects);
    context.insert("skills", &skills);
    context.insert("educations", &educations);
    context.insert("videos", &videos);
    context.insert("form", &FormView::from(form));
    context.insert("errors", &errors.messages());
    context.insert("flash", &flash);

    let html = state.templates.render("home.html", &context)?;
    Ok(Html(html))
}

fn log_media_references(
    profile: &Profile,
    publications: &[Publication],
    projects: &[Project],
    videos: &[Video],
) {
    tracing::debug!(photo = profile.photo.as_deref().unwrap_or("None"), "profile photo");
    for project in projects {
        tracing::debug!(
            project = %project.title,
            image = project.image.as_deref().unwrap_or("None"),
            "project image"
        );
    }
    for publication in publications {
        tracing::debug!(
            publication = %publication.title,
            image = publication.image.as_deref().unwrap_or("None"),
            "publication image"
        );
    }
    for video in videos {
        tracing::debug!(video = %video.title, url = %video.url, "video url");
    }
}

/// GET /
///
/// Shows a pending flash notice once and expires its cookie.
pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> Result<Response, AppError> {
    let flash = Flash::from_headers(&headers);
    let page = render_home(&state, &FeedbackForm::default(), &FieldErrors::new(), flash.as_ref()).await?;

    let mut response = page.into_response();
    if flash.is_some() {
        response
            .headers_mut()
            .append(SET_COOKIE, clear_cookie_header());
    }
    Ok(response)
}

/// POST /
///
/// Validates and stores a visitor's feedback, sent url-encoded or as multipart.
/// Background scripts get JSON; browser navigation gets a redirect (accepted)
/// or the re-rendered page (rejected).
pub async fn submit_feedback(
    State(state): State<AppState>,
    kind: RequestKind,
    headers: HeaderMap,
    FormBody(mut form): FormBody<FeedbackForm>,
) -> Result<Response, AppError> {
    form.normalize();

    let errors = match form.clean() {
        Ok(new_feedback) => {
            let saved = db::feedback::insert(&state.pool, &new_feedback).await?;
            tracing::info!(feedback_id = saved.id, "Feedback received");

            if kind.is_programmatic() {
                return Ok((StatusCode::OK, Json(json!({ "success": true }))).into_response());
            }

            let mut response = Redirect::to("/").into_response();
            if let Some(cookie) = Flash::success(FEEDBACK_THANKS).to_cookie_header() {
                response.headers_mut().append(SET_COOKIE, cookie);
            }
            return Ok(response);
        }
        Err(errors) => errors,
    };

    tracing::info!(
        fields = ?errors.fields().collect::<Vec<_>>(),
        "Feedback rejected"
    );

    if kind.is_programmatic() {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(json!({
                "success": false,
                "errors": errors.to_json_string(),
            })),
        )
            .into_response());
    }

    let flash = Flash::error(FEEDBACK_FIX_ERRORS);
    let page = render_home(&state, &form, &errors, Some(&flash)).await?;

    // A notice left over from an earlier submission must not outlive this page.
    let mut response = page.into_response();
    if Flash::from_headers(&headers).is_some() {
        response
            .headers_mut()
            .append(SET_COOKIE, clear_cookie_header());
    }
    Ok(response)
}
