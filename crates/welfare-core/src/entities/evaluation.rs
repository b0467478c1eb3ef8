use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::OptionLetter;

/// A stored answer to one question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Response {
    pub question_id: String,
    pub selection: OptionLetter,
    pub points: u8,
    pub comment: Option<String>,
}

/// A completed welfare evaluation of one animal. Immutable once stored.
///
/// `global_score` is always derived from `responses` at submission time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Evaluation {
    pub id: String,
    pub animal_id: String,
    pub evaluated_at: DateTime<Utc>,
    pub evaluator: String,
    pub evaluator_role: Option<String>,
    pub enclosure: Option<String>,
    pub confidence: Option<u8>,
    pub global_score: u8,
    pub responses: Vec<Response>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// How a candidate answer was given: as raw points or as an option letter.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnswerValue {
    Points(u8),
    Letter(OptionLetter),
}

/// A candidate answer, not yet validated against the questionnaire.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Answer {
    pub question_id: String,
    pub value: AnswerValue,
    pub comment: Option<String>,
}

impl Answer {
    #[must_use]
    pub fn points(question_id: impl Into<String>, points: u8) -> Self {
        Self {
            question_id: question_id.into(),
            value: AnswerValue::Points(points),
            comment: None,
        }
    }

    #[must_use]
    pub fn letter(question_id: impl Into<String>, letter: OptionLetter) -> Self {
        Self {
            question_id: question_id.into(),
            value: AnswerValue::Letter(letter),
            comment: None,
        }
    }

    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// Payload for submitting a new evaluation to the record store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewEvaluation {
    pub animal_id: String,
    pub evaluator: String,
    pub evaluator_role: Option<String>,
    pub enclosure: Option<String>,
    pub confidence: Option<u8>,
    /// Defaults to the submission time when `None`.
    pub evaluated_at: Option<DateTime<Utc>>,
    pub answers: Vec<Answer>,
    pub notes: Option<String>,
    /// Explicit confirmation that unanswered questions are acceptable.
    pub allow_incomplete: bool,
}
