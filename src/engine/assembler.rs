// src/engine/assembler.rs

use crate::models::question::{Question, QuestionType};
use crate::models::view::{ExamView, NumberedQuestion, Section};

/// Groups questions into sections and numbers them.
///
/// * Stable partition by type: within a section, input order is preserved.
/// * Sections come in the order mcq, short, long, then unrecognized types in
///   first-seen order. Empty canonical sections are left out.
/// * One counter, starting at 1, runs across all sections.
pub fn assemble(questions: &[Question]) -> ExamView<'_> {
    let mut buckets: Vec<(QuestionType, Vec<&Question>)> = QuestionType::CANONICAL
        .iter()
        .cloned()
        .map(|question_type| (question_type, Vec::new()))
        .collect();

    for question in questions {
        match buckets
            .iter_mut()
            .find(|(question_type, _)| *question_type == question.question_type)
        {
            Some((_, bucket)) => bucket.push(question),
            None => buckets.push((question.question_type.clone(), vec![question])),
        }
    }

    let mut number = 0;
    let sections = buckets
        .into_iter()
        .filter(|(_, bucket)| !bucket.is_empty())
        .map(|(question_type, bucket)| Section {
            question_type,
            questions: bucket
                .into_iter()
                .map(|question| {
                    number += 1;
                    NumberedQuestion { number, question }
                })
                .collect(),
        })
        .collect();

    ExamView { sections }
}
