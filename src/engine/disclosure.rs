// src/engine/disclosure.rs

use std::collections::HashSet;

use crate::models::question::Question;

/// Answer-key disclosure policy.
///
/// Visible when the question has a key and either the global switch is on or
/// the question was expanded individually. The two controls are independent:
/// turning the global switch off leaves `expanded` untouched.
pub fn is_answer_visible(question: &Question, expanded: &HashSet<i64>, show_all: bool) -> bool {
    question.answer_key.is_some() && (show_all || expanded.contains(&question.id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::question::{AnswerKey, Difficulty, McqKey, QuestionType};

    fn mcq(id: i64, with_key: bool) -> Question {
        Question {
            id,
            question_type: QuestionType::Mcq,
            text: "Pick one".to_string(),
            difficulty: Difficulty::Easy,
            bloom_level: None,
            options: Some(vec![Some("yes".to_string()), Some("no".to_string())]),
            answer_key: with_key.then(|| {
                AnswerKey::Mcq(McqKey {
                    correct_option: Some("A".to_string()),
                    ..McqKey::default()
                })
            }),
        }
    }

    #[test]
    fn test_global_switch_reveals_every_key() {
        assert!(is_answer_visible(&mcq(1, true), &HashSet::new(), true));
    }

    #[test]
    fn test_hidden_by_default() {
        assert!(!is_answer_visible(&mcq(1, true), &HashSet::new(), false));
    }

    #[test]
    fn test_individual_expand_reveals_only_that_question() {
        let expanded = HashSet::from([1]);
        assert!(is_answer_visible(&mcq(1, true), &expanded, false));
        assert!(!is_answer_visible(&mcq(2, true), &expanded, false));
    }

    #[test]
    fn test_missing_key_is_never_visible() {
        let expanded = HashSet::from([1]);
        assert!(!is_answer_visible(&mcq(1, false), &expanded, true));
        assert!(!is_answer_visible(&mcq(1, false), &expanded, false));
    }

    #[test]
    fn test_controls_are_additive() {
        let expanded = HashSet::from([1]);
        let q = mcq(1, true);
        // Global on then off: the individual expand still applies.
        assert!(is_answer_visible(&q, &expanded, true));
        assert!(is_answer_visible(&q, &expanded, false));
    }
}
