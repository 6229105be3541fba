// src/handlers/status.rs

use axum::{Json, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    engine::status::{actions, closes_at, resolve_state, result_summary},
    error::AppError,
    extractors::json::AppJson,
    models::exam::{
        ExamSchedule, ExamScheduleInput, ExamStatus, LifecycleState, ResultSummary,
        StudentAction, SubmissionRecord,
    },
};

/// One exam and the student's attempt on it, if any.
#[derive(Debug, Deserialize)]
pub struct ExamEntry {
    pub schedule: ExamScheduleInput,
    #[serde(default)]
    pub submission: Option<SubmissionRecord>,
}

/// DTO for resolving a single exam.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    #[serde(flatten)]
    pub entry: ExamEntry,
    /// Evaluation instant. Defaults to the server clock.
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
}

/// DTO for resolving a student's whole exam list against one instant.
#[derive(Debug, Deserialize)]
pub struct BatchStatusRequest {
    #[serde(default)]
    pub now: Option<DateTime<Utc>>,
    pub exams: Vec<ExamEntry>,
}

/// Badge, actions and timing for one exam.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub exam_id: i64,
    pub status: ExamStatus,
    pub started_unsubmitted: bool,
    pub lifecycle: LifecycleState,
    pub actions: Vec<StudentAction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closes_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultSummary>,
}

fn describe(entry: ExamEntry, now: DateTime<Utc>) -> Result<StatusResponse, AppError> {
    let schedule = ExamSchedule::try_from(entry.schedule)?;
    let submission = entry.submission.as_ref();
    let lifecycle = resolve_state(&schedule, submission, now);
    let status = lifecycle.status();

    tracing::debug!(exam_id = schedule.id(), ?status, "resolved exam status");

    Ok(StatusResponse {
        exam_id: schedule.id(),
        status,
        started_unsubmitted: lifecycle.is_started_unsubmitted(),
        actions: actions(status, submission),
        closes_at: closes_at(&schedule, &lifecycle),
        result: result_summary(&lifecycle, submission),
        lifecycle,
    })
}

/// Resolves the lifecycle status of a single exam for a student.
pub async fn resolve_status(
    AppJson(req): AppJson<StatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let now = req.now.unwrap_or_else(Utc::now);
    Ok(Json(describe(req.entry, now)?))
}

/// Resolves every exam on a student's dashboard.
///
/// * All entries are evaluated against the same instant.
/// * Output order matches input order.
/// * A single malformed schedule rejects the whole batch.
pub async fn resolve_status_batch(
    AppJson(req): AppJson<BatchStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let now = req.now.unwrap_or_else(Utc::now);
    let statuses = req
        .exams
        .into_iter()
        .map(|entry| describe(entry, now))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(statuses))
}
