// src/models/exam.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Scheduled window of an exam, as supplied by the exam store.
///
/// Always well-formed: `start_time < end_time` and `duration_minutes > 0`.
/// Deserialization goes through [`ExamSchedule::new`], so a malformed
/// schedule never reaches the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ExamScheduleInput")]
pub struct ExamSchedule {
    id: i64,
    start_time: DateTime<Utc>,
    end_time: DateTime<Utc>,
    duration_minutes: u32,
}

/// Unchecked wire shape of a schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ExamScheduleInput {
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub duration_minutes: u32,
}

impl TryFrom<ExamScheduleInput> for ExamSchedule {
    type Error = ValidationError;

    fn try_from(raw: ExamScheduleInput) -> Result<Self, Self::Error> {
        Self::new(raw.id, raw.start_time, raw.end_time, raw.duration_minutes)
    }
}

impl ExamSchedule {
    pub fn new(
        id: i64,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Result<Self, ValidationError> {
        if start_time >= end_time {
            return Err(ValidationError::MalformedSchedule { start_time, end_time });
        }
        if duration_minutes == 0 {
            return Err(ValidationError::InvalidDuration);
        }
        Ok(Self {
            id,
            start_time,
            end_time,
            duration_minutes,
        })
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// Inclusive: the exam opens exactly at this instant.
    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    /// Exclusive: at this instant the exam is already closed.
    pub fn end_time(&self) -> DateTime<Utc> {
        self.end_time
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }
}

/// Per-student attempt record for one exam.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub total_questions: u32,
    #[serde(default)]
    pub show_result_to_student: bool,
}

/// Lifecycle badge shown for a (student, exam) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExamStatus {
    Upcoming,
    Available,
    InProgress,
    Completed,
    Expired,
}

/// Why an exam reads as expired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expiry {
    NeverStarted,
    /// The window closed on an attempt that was never submitted.
    StartedNotSubmitted { started_at: DateTime<Utc> },
}

/// Detailed lifecycle state. Collapses to [`ExamStatus`] via [`LifecycleState::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LifecycleState {
    Upcoming,
    Available,
    InProgress { started_at: DateTime<Utc> },
    Completed { submitted_at: DateTime<Utc> },
    Expired(Expiry),
}

impl LifecycleState {
    pub fn status(&self) -> ExamStatus {
        match self {
            LifecycleState::Upcoming => ExamStatus::Upcoming,
            LifecycleState::Available => ExamStatus::Available,
            LifecycleState::InProgress { .. } => ExamStatus::InProgress,
            LifecycleState::Completed { .. } => ExamStatus::Completed,
            LifecycleState::Expired(_) => ExamStatus::Expired,
        }
    }

    /// True for a time-expired attempt that was started but never submitted.
    pub fn is_started_unsubmitted(&self) -> bool {
        matches!(
            self,
            LifecycleState::Expired(Expiry::StartedNotSubmitted { .. })
        )
    }
}

/// What a student may do with an exam in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentAction {
    Start,
    Resume,
    ViewResult,
}

/// Score disclosed to the student once results are released.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultSummary {
    pub score: Option<f64>,
    pub total_questions: u32,
}
