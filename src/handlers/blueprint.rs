// src/handlers/blueprint.rs

use axum::{Json, response::IntoResponse};

use crate::{
    engine::blueprint::validate, error::AppError, extractors::json::AppJson,
    models::blueprint::GenerationBlueprint,
};

/// Validates an exam-generation blueprint and returns the normalized form
/// to forward to the generation service.
pub async fn validate_blueprint(
    AppJson(blueprint): AppJson<GenerationBlueprint>,
) -> Result<impl IntoResponse, AppError> {
    let valid = validate(blueprint).inspect_err(|e| {
        tracing::info!(code = e.code(), "Rejected generation blueprint: {}", e);
    })?;

    tracing::debug!(
        subject_id = valid.subject_id,
        total = valid.total_questions(),
        seed = valid.seed,
        "validated generation blueprint"
    );

    Ok(Json(valid))
}
