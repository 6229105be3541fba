// src/engine/blueprint.rs

use rand::Rng;
use validator::Validate;

use crate::config::{MAX_DRAWN_SEED, MAX_LONG_COUNT, MAX_MCQ_COUNT, MAX_SHORT_COUNT};
use crate::error::ValidationError;
use crate::models::blueprint::{GenerationBlueprint, QuestionCounts, ValidBlueprint};

/// Validates a blueprint, drawing a seed from the thread RNG if none was given.
pub fn validate(blueprint: GenerationBlueprint) -> Result<ValidBlueprint, ValidationError> {
    validate_with_rng(blueprint, &mut rand::rng())
}

/// Validates a blueprint.
///
/// Checks, in order:
/// 1. a subject is selected (`MissingSubject`)
/// 2. at least one count is non-zero (`EmptyBlueprint`)
/// 3. every count is within its bound (`CountOutOfRange`, first of mcq, short, long)
///
/// An empty unit selection is normalized to `None` ("all units"). A missing
/// seed is drawn from `rng` in `0..=2^31-1`; a supplied seed is kept as is.
pub fn validate_with_rng<R: Rng>(
    blueprint: GenerationBlueprint,
    rng: &mut R,
) -> Result<ValidBlueprint, ValidationError> {
    let subject_id = blueprint.subject_id.ok_or(ValidationError::MissingSubject)?;

    let counts = blueprint.counts;
    if counts.is_empty() {
        return Err(ValidationError::EmptyBlueprint);
    }

    if let Err(errors) = counts.validate() {
        let failed = errors.field_errors();
        if let Some((kind, value, max)) = count_bounds(&counts)
            .into_iter()
            .find(|(kind, _, _)| failed.contains_key(*kind))
        {
            return Err(ValidationError::CountOutOfRange { kind, value, max });
        }
    }

    let unit_ids = blueprint.unit_ids.filter(|ids| !ids.is_empty());
    let seed = blueprint
        .seed
        .unwrap_or_else(|| rng.random_range(0..=MAX_DRAWN_SEED));

    Ok(ValidBlueprint {
        subject_id,
        unit_ids,
        counts,
        include_answer_key: blueprint.include_answer_key,
        seed,
    })
}

/// (field, requested, bound) in reporting order.
fn count_bounds(counts: &QuestionCounts) -> [(&'static str, u32, u32); 3] {
    [
        ("mcq", counts.mcq, MAX_MCQ_COUNT),
        ("short", counts.short, MAX_SHORT_COUNT),
        ("long", counts.long, MAX_LONG_COUNT),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::blueprint::UnitScope;
    use rand::{SeedableRng, rngs::StdRng};

    fn counts(mcq: u32, short: u32, long: u32) -> QuestionCounts {
        QuestionCounts { mcq, short, long }
    }

    fn blueprint(subject_id: Option<i64>, counts: QuestionCounts) -> GenerationBlueprint {
        GenerationBlueprint {
            subject_id,
            counts,
            seed: Some(42),
            ..GenerationBlueprint::default()
        }
    }

    #[test]
    fn test_missing_subject() {
        let err = validate(blueprint(None, counts(5, 0, 0))).unwrap_err();
        assert_eq!(err, ValidationError::MissingSubject);
    }

    #[test]
    fn test_missing_subject_is_reported_before_empty_counts() {
        let err = validate(blueprint(None, counts(0, 0, 0))).unwrap_err();
        assert_eq!(err, ValidationError::MissingSubject);
    }

    #[test]
    fn test_empty_blueprint() {
        let err = validate(blueprint(Some(7), counts(0, 0, 0))).unwrap_err();
        assert_eq!(err, ValidationError::EmptyBlueprint);
    }

    #[test]
    fn test_count_out_of_range() {
        let err = validate(blueprint(Some(7), counts(51, 0, 0))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CountOutOfRange {
                kind: "mcq",
                value: 51,
                max: 50
            }
        );
        assert_eq!(err.code(), "COUNT_OUT_OF_RANGE");
    }

    #[test]
    fn test_first_out_of_range_count_is_reported() {
        let err = validate(blueprint(Some(7), counts(10, 21, 11))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CountOutOfRange {
                kind: "short",
                value: 21,
                max: 20
            }
        );
    }

    #[test]
    fn test_huge_counts_are_out_of_range() {
        let err = validate(blueprint(Some(7), counts(u32::MAX, 1, 0))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::CountOutOfRange {
                kind: "mcq",
                value: u32::MAX,
                max: 50
            }
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let valid = validate(blueprint(Some(7), counts(50, 20, 10))).unwrap();
        assert_eq!(valid.total_questions(), 80);
    }

    #[test]
    fn test_empty_unit_selection_means_all_units() {
        let mut bp = blueprint(Some(7), counts(1, 0, 0));
        bp.unit_ids = Some(Vec::new());
        let valid = validate(bp).unwrap();
        assert_eq!(valid.unit_ids, None);
        assert_eq!(valid.unit_scope(), UnitScope::All);
    }

    #[test]
    fn test_selected_units_are_kept() {
        let mut bp = blueprint(Some(7), counts(0, 3, 1));
        bp.unit_ids = Some(vec![4, 2]);
        let valid = validate(bp).unwrap();
        assert_eq!(valid.unit_scope(), UnitScope::Selected(&[4, 2]));
    }

    #[test]
    fn test_supplied_seed_is_kept() {
        let mut bp = blueprint(Some(7), counts(1, 0, 0));
        bp.seed = Some(u32::MAX);
        assert_eq!(validate(bp).unwrap().seed, u32::MAX);
    }

    #[test]
    fn test_missing_seed_is_drawn_within_31_bits() {
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..200 {
            let mut bp = blueprint(Some(7), counts(1, 0, 0));
            bp.seed = None;
            let valid = validate_with_rng(bp, &mut rng).unwrap();
            assert!(valid.seed <= MAX_DRAWN_SEED);
        }
    }

    #[test]
    fn test_drawn_seed_follows_rng() {
        let draw = || {
            let mut bp = blueprint(Some(7), counts(1, 0, 0));
            bp.seed = None;
            validate_with_rng(bp, &mut StdRng::seed_from_u64(9)).unwrap().seed
        };
        assert_eq!(draw(), draw());
    }

    #[test]
    fn test_other_fields_pass_through() {
        let mut bp = blueprint(Some(3), counts(2, 2, 2));
        bp.include_answer_key = true;
        let valid = validate(bp).unwrap();
        assert_eq!(valid.subject_id, 3);
        assert_eq!(valid.counts, counts(2, 2, 2));
        assert!(valid.include_answer_key);
        assert_eq!(valid.seed, 42);
    }
}
