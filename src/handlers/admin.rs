// src/handlers/admin.rs
//
// Owner-only content management. Mounted behind `auth_middleware`.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sqlx::SqlitePool;

use crate::{
    db,
    error::AppError,
    models::{
        education::{EducationInput, EducationListParams},
        feedback::FeedbackListParams,
        profile::ProfileInput,
        project::{ProjectInput, ProjectListParams},
        publication::{PublicationInput, PublicationListParams},
        skill::{SkillInput, SkillListParams},
        video::{VideoInput, VideoListParams},
    },
};

fn not_found(entity: &str) -> AppError {
    AppError::NotFound(format!("{} not found", entity))
}

fn deleted_or_not_found(deleted: bool, entity: &str) -> Result<StatusCode, AppError> {
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(entity))
    }
}

// ---------------------------------------------------------------------------
// Profile (singleton)
// ---------------------------------------------------------------------------

/// Returns the stored profile. 404 until one has been saved.
pub async fn get_profile(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    let profile = db::profile::get(&pool)
        .await?
        .ok_or_else(|| not_found("Profile"))?;

    Ok(Json(profile))
}

/// Creates or replaces the site owner's profile.
pub async fn save_profile(
    State(pool): State<SqlitePool>,
    Json(payload): Json<ProfileInput>,
) -> Result<impl IntoResponse, AppError> {
    let profile = payload.clean()?;
    let saved = db::profile::upsert(&pool, &profile).await.map_err(|e| {
        tracing::error!("Failed to save profile: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!(name = %saved.name, "Profile saved");
    Ok(Json(saved))
}

/// Deletes the stored profile; the home page falls back to the placeholder.
pub async fn delete_profile(State(pool): State<SqlitePool>) -> Result<impl IntoResponse, AppError> {
    deleted_or_not_found(db::profile::delete(&pool).await?, "Profile")
}

// ---------------------------------------------------------------------------
// Publications
// ---------------------------------------------------------------------------

/// Lists publications. `q` matches title or journal; `date_from`/`date_to` bound the date.
pub async fn list_publications(
    State(pool): State<SqlitePool>,
    Query(params): Query<PublicationListParams>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(db::publications::search(&pool, &params).await?))
}

pub async fn get_publication(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let publication = db::publications::get(&pool, id)
        .await?
        .ok_or_else(|| not_found("Publication"))?;

    Ok(Json(publication))
}

pub async fn create_publication(
    State(pool): State<SqlitePool>,
    Json(payload): Json<PublicationInput>,
) -> Result<impl IntoResponse, AppError> {
    let new = payload.clean()?;
    let publication = db::publications::insert(&pool, &new).await.map_err(|e| {
        tracing::error!("Failed to create publication: {:?}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(publication)))
}

pub async fn update_publication(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<PublicationInput>,
) -> Result<impl IntoResponse, AppError> {
    let new = payload.clean()?;
    let publication = db::publications::update(&pool, id, &new)
        .await?
        .ok_or_else(|| not_found("Publication"))?;

    Ok(Json(publication))
}

pub async fn delete_publication(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    deleted_or_not_found(db::publications::delete(&pool, id).await?, "Publication")
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

pub async fn list_projects(
    State(pool): State<SqlitePool>,
    Query(params): Query<ProjectListParams>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(db::projects::search(&pool, &params).await?))
}

pub async fn get_project(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let project = db::projects::get(&pool, id)
        .await?
        .ok_or_else(|| not_found("Project"))?;

    Ok(Json(project))
}

pub async fn create_project(
    State(pool): State<SqlitePool>,
    Json(payload): Json<ProjectInput>,
) -> Result<impl IntoResponse, AppError> {
    let new = payload.clean()?;
    let project = db::projects::insert(&pool, &new).await.map_err(|e| {
        tracing::error!("Failed to create project: {:?}", e);
        AppError::from(e)
    })?;

    Ok((StatusCode::CREATED, Json(project)))
}

pub async fn update_project(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<ProjectInput>,
) -> Result<impl IntoResponse, AppError> {
    let new = payload.clean()?;
    let project = db::projects::update(&pool, id, &new)
        .await?
        .ok_or_else(|| not_found("Project"))?;

    Ok(Json(project))
}

pub async fn delete_project(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    deleted_or_not_found(db::projects::delete(&pool, id).await?, "Project")
}

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

pub async fn list_skills(
    State(pool): State<SqlitePool>,
    Query(params): Query<SkillListParams>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(db::skills::search(&pool, &params).await?))
}

pub async fn get_skill(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let skill = db::skills::get(&pool, id)
        .await?
        .ok_or_else(|| not_found("Skill"))?;

    Ok(Json(skill))
}

pub async fn create_skill(
    State(pool): State<SqlitePool>,
    Json(payload): Json<SkillInput>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.clean()?;
    let skill = db::skills::insert(&pool, &name).await?;

    Ok((StatusCode::CREATED, Json(skill)))
}

pub async fn update_skill(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<SkillInput>,
) -> Result<impl IntoResponse, AppError> {
    let name = payload.clean()?;
    let skill = db::skills::update(&pool, id, &name)
        .await?
        .ok_or_else(|| not_found("Skill"))?;

    Ok(Json(skill))
}

pub async fn delete_skill(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    deleted_or_not_found(db::skills::delete(&pool, id).await?, "Skill")
}

// ---------------------------------------------------------------------------
// Education
// ---------------------------------------------------------------------------

/// Lists education entries. `q` matches degree or institute; `institute` filters exactly.
pub async fn list_educations(
    State(pool): State<SqlitePool>,
    Query(params): Query<EducationListParams>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(db::educations::search(&pool, &params).await?))
}

pub async fn get_education(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let education = db::educations::get(&pool, id)
        .await?
        .ok_or_else(|| not_found("Education"))?;

    Ok(Json(education))
}

pub async fn create_education(
    State(pool): State<SqlitePool>,
    Json(payload): Json<EducationInput>,
) -> Result<impl IntoResponse, AppError> {
    let new = payload.clean()?;
    let education = db::educations::insert(&pool, &new).await.map_err(|e| {
        tracing::error!("Failed to create education: {:?}", e);
        AppError::from(e)
    })?;

    tracing::info!(entry = %education.label(), "Education added");
    Ok((StatusCode::CREATED, Json(education)))
}

pub async fn update_education(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<EducationInput>,
) -> Result<impl IntoResponse, AppError> {
    let new = payload.clean()?;
    let education = db::educations::update(&pool, id, &new)
        .await?
        .ok_or_else(|| not_found("Education"))?;

    Ok(Json(education))
}

pub async fn delete_education(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    deleted_or_not_found(db::educations::delete(&pool, id).await?, "Education")
}

// ---------------------------------------------------------------------------
// Videos
// ---------------------------------------------------------------------------

pub async fn list_videos(
    State(pool): State<SqlitePool>,
    Query(params): Query<VideoListParams>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(db::videos::search(&pool, &params).await?))
}

pub async fn get_video(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let video = db::videos::get(&pool, id)
        .await?
        .ok_or_else(|| not_found("Video"))?;

    Ok(Json(video))
}

pub async fn create_video(
    State(pool): State<SqlitePool>,
    Json(payload): Json<VideoInput>,
) -> Result<impl IntoResponse, AppError> {
    let new = payload.clean()?;
    let video = db::videos::insert(&pool, &new).await.map_err(|e| {
        tracing::error!("Failed to create video: {:?}", e);
        AppError::from(e)
    })?;

    if video.youtube_id().is_none() {
        tracing::warn!(url = %video.url, "Video URL is not a recognised YouTube link");
    }
    Ok((StatusCode::CREATED, Json(video)))
}

/// Replaces a video's title, url and description. `created_at` never changes.
pub async fn update_video(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Json(payload): Json<VideoInput>,
) -> Result<impl IntoResponse, AppError> {
    let new = payload.clean()?;
    let video = db::videos::update(&pool, id, &new)
        .await?
        .ok_or_else(|| not_found("Video"))?;

    Ok(Json(video))
}

pub async fn delete_video(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    deleted_or_not_found(db::videos::delete(&pool, id).await?, "Video")
}

// ---------------------------------------------------------------------------
// Feedback (read-only apart from deletion)
// ---------------------------------------------------------------------------

/// Lists visitor feedback, newest first. `q` matches name or email.
pub async fn list_feedback(
    State(pool): State<SqlitePool>,
    Query(params): Query<FeedbackListParams>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(db::feedback::search(&pool, &params).await?))
}

pub async fn get_feedback(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let feedback = db::feedback::get(&pool, id)
        .await?
        .ok_or_else(|| not_found("Feedback"))?;

    Ok(Json(feedback))
}

pub async fn delete_feedback(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    deleted_or_not_found(db::feedback::delete(&pool, id).await?, "Feedback")
}
