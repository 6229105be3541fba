// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::post,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::Config,
    handlers::{blueprint, exam, status},
};

/// Assembles the main application router.
///
/// * Merges the exam and blueprint sub-routers.
/// * Applies global middleware (Trace, CORS).
///
/// Every handler is stateless, so the router carries no state.
pub fn create_router(config: &Config) -> Router {
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let exam_routes = Router::new()
        .route("/status", post(status::resolve_status))
        .route("/status/batch", post(status::resolve_status_batch))
        .route("/view", post(exam::render_exam));

    let blueprint_routes = Router::new().route("/validate", post(blueprint::validate_blueprint));

    Router::new()
        .nest("/api/exams", exam_routes)
        .nest("/api/blueprints", blueprint_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
