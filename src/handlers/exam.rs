// src/handlers/exam.rs

use std::collections::HashSet;

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::{
    engine::assembler::assemble, error::AppError, extractors::json::AppJson,
    models::question::Question,
};

/// DTO for rendering an exam paper.
#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub questions: Vec<Question>,
    /// Questions whose answer key the viewer expanded individually.
    #[serde(default)]
    pub expanded: HashSet<i64>,
    /// Global "show answers" switch.
    #[serde(default)]
    pub show_answers: bool,
}

/// Assembles a question set into numbered, type-grouped sections.
/// Answer keys are included only where the disclosure policy allows.
pub async fn render_exam(AppJson(req): AppJson<ViewRequest>) -> Result<Response, AppError> {
    let view = assemble(&req.questions);
    let rendered = view.render(&req.expanded, req.show_answers);

    tracing::debug!(
        total = rendered.total_questions,
        sections = rendered.sections.len(),
        show_answers = req.show_answers,
        "assembled exam view"
    );

    // `rendered` borrows the request body, so serialize before returning.
    Ok(Json(&rendered).into_response())
}
