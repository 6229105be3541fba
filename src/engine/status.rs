// src/engine/status.rs

use chrono::{DateTime, Duration, Utc};

use crate::models::exam::{
    ExamSchedule, ExamStatus, Expiry, LifecycleState, ResultSummary, StudentAction,
    SubmissionRecord,
};

/// Resolves the detailed lifecycle state of one (student, exam) pair at `now`.
///
/// Rules, first match wins:
/// 1. submitted → Completed, regardless of the window or `now`
/// 2. `now < start_time` → Upcoming
/// 3. `now >= end_time` → Expired, remembering whether an attempt was started
/// 4. started → InProgress
/// 5. otherwise → Available
pub fn resolve_state(
    schedule: &ExamSchedule,
    submission: Option<&SubmissionRecord>,
    now: DateTime<Utc>,
) -> LifecycleState {
    let started_at = submission.and_then(|s| s.started_at);

    if let Some(submitted_at) = submission.and_then(|s| s.submitted_at) {
        return LifecycleState::Completed { submitted_at };
    }

    if now < schedule.start_time() {
        return LifecycleState::Upcoming;
    }

    if now >= schedule.end_time() {
        let expiry = match started_at {
            Some(started_at) => Expiry::StartedNotSubmitted { started_at },
            None => Expiry::NeverStarted,
        };
        return LifecycleState::Expired(expiry);
    }

    match started_at {
        Some(started_at) => LifecycleState::InProgress { started_at },
        None => LifecycleState::Available,
    }
}

/// Resolves the lifecycle badge of one (student, exam) pair at `now`.
pub fn resolve(
    schedule: &ExamSchedule,
    submission: Option<&SubmissionRecord>,
    now: DateTime<Utc>,
) -> ExamStatus {
    resolve_state(schedule, submission, now).status()
}

/// Actions offered to the student for a resolved status.
pub fn actions(status: ExamStatus, submission: Option<&SubmissionRecord>) -> Vec<StudentAction> {
    match status {
        ExamStatus::Available => vec![StudentAction::Start],
        ExamStatus::InProgress => vec![StudentAction::Resume],
        ExamStatus::Completed if submission.is_some_and(|s| s.show_result_to_student) => {
            vec![StudentAction::ViewResult]
        }
        ExamStatus::Upcoming | ExamStatus::Completed | ExamStatus::Expired => Vec::new(),
    }
}

/// Score summary, only for completed attempts whose results were released.
pub fn result_summary(
    state: &LifecycleState,
    submission: Option<&SubmissionRecord>,
) -> Option<ResultSummary> {
    match (state, submission) {
        (LifecycleState::Completed { .. }, Some(sub)) if sub.show_result_to_student => {
            Some(ResultSummary {
                score: sub.score,
                total_questions: sub.total_questions,
            })
        }
        _ => None,
    }
}

/// Latest instant an in-progress attempt may still be submitted: the
/// earlier of `started_at + duration` and the window end.
pub fn closes_at(schedule: &ExamSchedule, state: &LifecycleState) -> Option<DateTime<Utc>> {
    match state {
        LifecycleState::InProgress { started_at } => {
            let by_duration = *started_at + Duration::minutes(i64::from(schedule.duration_minutes()));
            Some(by_duration.min(schedule.end_time()))
        }
        _ => None,
    }
}
