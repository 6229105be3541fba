// src/models/blueprint.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::config::{MAX_LONG_COUNT, MAX_MCQ_COUNT, MAX_SHORT_COUNT};
use crate::models::question::Question;

/// Requested number of questions per type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct QuestionCounts {
    #[serde(default)]
    #[validate(range(max = MAX_MCQ_COUNT))]
    pub mcq: u32,
    #[serde(default)]
    #[validate(range(max = MAX_SHORT_COUNT))]
    pub short: u32,
    #[serde(default)]
    #[validate(range(max = MAX_LONG_COUNT))]
    pub long: u32,
}

impl QuestionCounts {
    /// Widened so that unchecked counts cannot overflow.
    pub fn total(&self) -> u64 {
        u64::from(self.mcq) + u64::from(self.short) + u64::from(self.long)
    }

    pub fn is_empty(&self) -> bool {
        self.mcq == 0 && self.short == 0 && self.long == 0
    }
}

/// DTO for an exam-generation request as filled in by an administrator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationBlueprint {
    #[serde(default)]
    pub subject_id: Option<i64>,

    /// `None` or an empty list both mean "every unit of the subject".
    #[serde(default)]
    pub unit_ids: Option<Vec<i64>>,

    #[serde(default)]
    pub counts: QuestionCounts,

    #[serde(default)]
    pub include_answer_key: bool,

    /// Generation seed. Drawn at validation time when absent.
    #[serde(default)]
    pub seed: Option<u32>,
}

/// A blueprint that passed validation, ready to send to the generation service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidBlueprint {
    pub subject_id: i64,
    /// Normalized: never `Some` of an empty list.
    pub unit_ids: Option<Vec<i64>>,
    pub counts: QuestionCounts,
    pub include_answer_key: bool,
    pub seed: u32,
}

/// Which units of a subject the generator draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitScope<'a> {
    All,
    Selected(&'a [i64]),
}

impl ValidBlueprint {
    pub fn unit_scope(&self) -> UnitScope<'_> {
        match self.unit_ids.as_deref() {
            Some(ids) if !ids.is_empty() => UnitScope::Selected(ids),
            _ => UnitScope::All,
        }
    }

    pub fn total_questions(&self) -> u64 {
        self.counts.total()
    }
}

/// Response body of the generation service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedExam {
    #[serde(default)]
    pub exam_id: Option<i64>,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assembler::assemble;

    #[test]
    fn test_generated_exam_feeds_assembler() {
        let generated: GeneratedExam = serde_json::from_value(serde_json::json!({
            "exam_id": 40,
            "questions": [
                { "id": 1, "type": "short", "text": "a", "difficulty": "easy" },
                { "id": 2, "type": "mcq", "text": "b", "difficulty": "easy",
                  "options": ["x", "y"], "answer_key": { "correct_option": "A" } }
            ]
        }))
        .unwrap();

        let view = assemble(&generated.questions);
        let first = view.numbered().next().unwrap();
        assert_eq!((first.number, first.question.id), (1, 2));
    }

    #[test]
    fn test_counts_default_to_zero() {
        let blueprint: GenerationBlueprint =
            serde_json::from_value(serde_json::json!({ "subject_id": 1, "counts": { "long": 2 } }))
                .unwrap();
        assert_eq!(blueprint.counts, QuestionCounts { mcq: 0, short: 0, long: 2 });
        assert_eq!(blueprint.seed, None);
    }

    #[test]
    fn test_total_does_not_overflow() {
        let counts = QuestionCounts { mcq: u32::MAX, short: 1, long: u32::MAX };
        assert!(!counts.is_empty());
        assert_eq!(counts.total(), 2 * u64::from(u32::MAX) + 1);
    }
}
