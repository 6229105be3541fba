// src/models/view.rs

use std::collections::HashSet;

use serde::Serialize;

use crate::engine::disclosure::is_answer_visible;
use crate::models::question::{AnswerKey, Difficulty, Question, QuestionType};

/// A question paired with its global display number (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumberedQuestion<'a> {
    pub number: usize,
    pub question: &'a Question,
}

/// One type-grouped block of the exam.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section<'a> {
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub questions: Vec<NumberedQuestion<'a>>,
}

impl Section<'_> {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Grouped and numbered view over a borrowed question set. Recomputed on
/// every read; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExamView<'a> {
    pub sections: Vec<Section<'a>>,
}

impl<'a> ExamView<'a> {
    /// Total number of questions across all sections.
    pub fn len(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn section(&self, question_type: &QuestionType) -> Option<&Section<'a>> {
        self.sections
            .iter()
            .find(|section| &section.question_type == question_type)
    }

    /// Numbered questions in display order.
    pub fn numbered(&self) -> impl Iterator<Item = &NumberedQuestion<'a>> {
        self.sections.iter().flat_map(|section| section.questions.iter())
    }

    /// Projects the view into its public form, attaching answer keys only
    /// where the disclosure policy allows.
    pub fn render(&self, expanded: &HashSet<i64>, show_all: bool) -> RenderedExam<'a> {
        let sections = self
            .sections
            .iter()
            .map(|section| RenderedSection {
                question_type: section.question_type.clone(),
                count: section.len(),
                questions: section
                    .questions
                    .iter()
                    .map(|numbered| PublicQuestion::new(numbered, expanded, show_all))
                    .collect(),
            })
            .collect();

        RenderedExam {
            total_questions: self.len(),
            sections,
        }
    }
}

/// DTO for sending a numbered question to the client. The answer key is
/// present only when disclosed.
#[derive(Debug, Serialize)]
pub struct PublicQuestion<'a> {
    pub number: usize,
    pub id: i64,
    #[serde(rename = "type")]
    pub question_type: &'a QuestionType,
    pub text: &'a str,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bloom_level: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'a [Option<String>]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_key: Option<&'a AnswerKey>,
}

impl<'a> PublicQuestion<'a> {
    fn new(numbered: &NumberedQuestion<'a>, expanded: &HashSet<i64>, show_all: bool) -> Self {
        let q = numbered.question;
        let answer_key = if is_answer_visible(q, expanded, show_all) {
            q.answer_key.as_ref()
        } else {
            None
        };

        PublicQuestion {
            number: numbered.number,
            id: q.id,
            question_type: &q.question_type,
            text: &q.text,
            difficulty: q.difficulty,
            bloom_level: q.bloom_level.as_deref(),
            options: q.options.as_deref(),
            answer_key,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RenderedSection<'a> {
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub count: usize,
    pub questions: Vec<PublicQuestion<'a>>,
}

/// DTO for returning an assembled exam.
#[derive(Debug, Serialize)]
pub struct RenderedExam<'a> {
    pub total_questions: usize,
    pub sections: Vec<RenderedSection<'a>>,
}
