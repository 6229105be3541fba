// src/models/question.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// Question type label.
///
/// Labels other than `mcq`, `short` and `long` are kept verbatim instead of
/// being rejected, so a generated question with an unexpected type survives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    Mcq,
    Short,
    Long,
    Other(String),
}

impl QuestionType {
    /// Section order used by the assembler.
    pub const CANONICAL: [QuestionType; 3] = [QuestionType::Mcq, QuestionType::Short, QuestionType::Long];

    pub fn as_str(&self) -> &str {
        match self {
            QuestionType::Mcq => "mcq",
            QuestionType::Short => "short",
            QuestionType::Long => "long",
            QuestionType::Other(label) => label,
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, QuestionType::Other(_))
    }
}

impl From<String> for QuestionType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "mcq" => QuestionType::Mcq,
            "short" => QuestionType::Short,
            "long" => QuestionType::Long,
            _ => QuestionType::Other(label),
        }
    }
}

impl From<&str> for QuestionType {
    fn from(label: &str) -> Self {
        QuestionType::from(label.to_string())
    }
}

impl From<QuestionType> for String {
    fn from(question_type: QuestionType) -> Self {
        match question_type {
            QuestionType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Explanation of why the distractors are wrong: free text or one line per option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WhyOthersWrong {
    Text(String),
    List(Vec<String>),
}

/// Marking rubric: free text or an arbitrary structured object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rubric {
    Text(String),
    Structured(serde_json::Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct McqKey {
    /// Option letter, e.g. "B".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub correct_option: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_correct: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why_others_wrong: Option<WhyOthersWrong>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShortKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_points: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<Rubric>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LongKey {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_outline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<Rubric>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marking_scheme: Option<String>,
}

/// Answer key, shaped by the owning question's type.
///
/// Serialized untagged: only the variant's present fields appear.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Mcq(McqKey),
    Short(ShortKey),
    Long(LongKey),
    /// Key of an unrecognized question type, or one that does not fit its variant.
    Unstructured(serde_json::Value),
}

impl AnswerKey {
    /// Decodes a raw key against the question type. Never fails.
    pub fn decode(question_type: &QuestionType, raw: serde_json::Value) -> Self {
        let decoded = match question_type {
            QuestionType::Mcq => serde_json::from_value(raw.clone()).map(AnswerKey::Mcq),
            QuestionType::Short => serde_json::from_value(raw.clone()).map(AnswerKey::Short),
            QuestionType::Long => serde_json::from_value(raw.clone()).map(AnswerKey::Long),
            QuestionType::Other(_) => return AnswerKey::Unstructured(raw),
        };
        decoded.unwrap_or(AnswerKey::Unstructured(raw))
    }
}

/// A question as delivered by the exam store or the generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawQuestion")]
pub struct Question {
    pub id: i64,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub text: String,
    pub difficulty: Difficulty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bloom_level: Option<String>,
    /// Choices, in display order. Only meaningful for `mcq`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<Option<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_key: Option<AnswerKey>,
}

/// Wire shape; the answer key is typed once the question type is known.
#[derive(Deserialize)]
struct RawQuestion {
    id: i64,
    #[serde(rename = "type")]
    question_type: QuestionType,
    text: String,
    difficulty: Difficulty,
    #[serde(default)]
    bloom_level: Option<String>,
    #[serde(default)]
    options: Option<Vec<Option<String>>>,
    #[serde(default)]
    answer_key: Option<serde_json::Value>,
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        let answer_key = raw
            .answer_key
            .filter(|value| !value.is_null())
            .map(|value| AnswerKey::decode(&raw.question_type, value));

        Question {
            id: raw.id,
            question_type: raw.question_type,
            text: raw.text,
            difficulty: raw.difficulty,
            bloom_level: raw.bloom_level,
            options: raw.options,
            answer_key,
        }
    }
}
