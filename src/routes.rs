// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::{
    handlers::{admin, auth, home},
    state::AppState,
    utils::jwt::auth_middleware,
};

/// Assembles the main application router.
///
/// * Public site: home page + feedback form, media and static files.
/// * Admin API under `/api/admin`, guarded by JWT (except login).
/// * Applies global middleware (Trace, CORS).
pub fn create_router(state: AppState) -> Router {
    let origins: Vec<HeaderValue> = state
        .config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-requested-with"),
        ]);

    let admin_routes = Router::new()
        .route(
            "/profile",
            get(admin::get_profile)
                .put(admin::save_profile)
                .delete(admin::delete_profile),
        )
        .route(
            "/publications",
            get(admin::list_publications).post(admin::create_publication),
        )
        .route(
            "/publications/{id}",
            get(admin::get_publication)
                .put(admin::update_publication)
                .delete(admin::delete_publication),
        )
        .route(
            "/projects",
            get(admin::list_projects).post(admin::create_project),
        )
        .route(
            "/projects/{id}",
            get(admin::get_project)
                .put(admin::update_project)
                .delete(admin::delete_project),
        )
        .route("/skills", get(admin::list_skills).post(admin::create_skill))
        .route(
            "/skills/{id}",
            get(admin::get_skill)
                .put(admin::update_skill)
                .delete(admin::delete_skill),
        )
        .route(
            "/educations",
            get(admin::list_educations).post(admin::create_education),
        )
        .route(
            "/educations/{id}",
            get(admin::get_education)
                .put(admin::update_education)
                .delete(admin::delete_education),
        )
        .route("/videos", get(admin::list_videos).post(admin::create_video))
        .route(
            "/videos/{id}",
            get(admin::get_video)
                .put(admin::update_video)
                .delete(admin::delete_video),
        )
        .route("/feedback", get(admin::list_feedback))
        .route(
            "/feedback/{id}",
            get(admin::get_feedback).delete(admin::delete_feedback),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        // Login stays outside the auth layer.
        .route("/login", post(auth::login));

    let media = ServeDir::new(&state.config.media_dir);
    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(home::home).post(home::submit_feedback))
        .route("/health", get(|| async { "ok" }))
        .nest("/api/admin", admin_routes)
        .nest_service("/media", media)
        .nest_service("/static", assets)
        // Global Middleware (applied from outside in)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
