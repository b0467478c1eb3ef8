//! Response-set validation against the questionnaire.
//!
//! A complete response set has exactly one answer per question, each worth
//! 1–5 points. Out-of-range points, unknown question ids, duplicates and
//! letters the question does not offer are always rejected. Missing answers
//! are rejected unless the caller explicitly allows an incomplete set; the
//! missing ids are reported either way.

use std::collections::{HashMap, HashSet};
use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Answer, AnswerValue, Question, Response};
use crate::enums::OptionLetter;

/// Question ids that made a response set invalid, grouped by reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationError {
    /// Questions without an answer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub missing: Vec<String>,
    /// Answers referencing a question id that is not in the questionnaire.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown: Vec<String>,
    /// Answers whose point value is outside `1..=5`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub out_of_range: Vec<String>,
    /// Questions answered more than once.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicated: Vec<String>,
    /// Answers selecting a letter or point value the question does not offer.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unoffered: Vec<String>,
}

impl ValidationError {
    /// `true` when no problem of any kind was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty() && !self.has_invalid_answers()
    }

    /// `true` when at least one supplied answer is itself invalid.
    #[must_use]
    pub fn has_invalid_answers(&self) -> bool {
        !(self.unknown.is_empty()
            && self.out_of_range.is_empty()
            && self.duplicated.is_empty()
            && self.unoffered.is_empty())
    }

    fn summary(&self) -> String {
        let groups = [
            ("missing", &self.missing),
            ("unknown", &self.unknown),
            ("out of range", &self.out_of_range),
            ("duplicated", &self.duplicated),
            ("unoffered option", &self.unoffered),
        ];
        groups
            .iter()
            .filter(|(_, ids)| !ids.is_empty())
            .map(|(label, ids)| format!("{label} [{}]", ids.join(", ")))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid response set: {}", self.summary())
    }
}

impl std::error::Error for ValidationError {}

/// Outcome of a successful validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedResponses {
    /// Resolved responses in questionnaire order.
    pub responses: Vec<Response>,
    /// Questions left unanswered (only non-empty when incomplete sets are allowed).
    pub missing: Vec<String>,
}

impl ValidatedResponses {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Validate candidate answers against the questionnaire.
///
/// # Errors
///
/// Returns [`ValidationError`] when any answer is invalid, or when questions
/// are unanswered and `allow_incomplete` is `false`.
pub fn validate_answers(
    questions: &[Question],
    answers: &[Answer],
    allow_incomplete: bool,
) -> Result<ValidatedResponses, ValidationError> {
    let by_id: HashMap<&str, &Question> =
        questions.iter().map(|q| (q.id.as_str(), q)).collect();

    let mut err = ValidationError::default();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut resolved: HashMap<&str, Response> = HashMap::new();

    for answer in answers {
        let id = answer.question_id.as_str();
        let Some(question) = by_id.get(id) else {
            push_unique(&mut err.unknown, id);
            continue;
        };
        if !seen.insert(id) {
            push_unique(&mut err.duplicated, id);
            resolved.remove(id);
            continue;
        }
        match resolve(question, answer) {
            Ok(response) => {
                resolved.insert(id, response);
            }
            Err(Rejection::OutOfRange) => err.out_of_range.push(id.to_string()),
            Err(Rejection::Unoffered) => err.unoffered.push(id.to_string()),
        }
    }

    let mut ordered: Vec<&Question> = questions.iter().collect();
    ordered.sort_by_key(|q| q.position);

    err.missing = ordered
        .iter()
        .filter(|q| !seen.contains(q.id.as_str()))
        .map(|q| q.id.clone())
        .collect();

    if err.has_invalid_answers() || (!allow_incomplete && !err.missing.is_empty()) {
        return Err(err);
    }

    let responses = ordered
        .iter()
        .filter_map(|q| resolved.remove(q.id.as_str()))
        .collect();

    Ok(ValidatedResponses {
        responses,
        missing: err.missing,
    })
}

enum Rejection {
    OutOfRange,
    Unoffered,
}

fn resolve(question: &Question, answer: &Answer) -> Result<Response, Rejection> {
    let (selection, points) = match answer.value {
        AnswerValue::Points(points) => {
            if !(1..=5).contains(&points) {
                return Err(Rejection::OutOfRange);
            }
            let selection = match question.option_for_points(points) {
                Some(opt) => opt.letter,
                None if question.options.is_empty() => {
                    OptionLetter::from_points(points).ok_or(Rejection::OutOfRange)?
                }
                None => return Err(Rejection::Unoffered),
            };
            (selection, points)
        }
        AnswerValue::Letter(letter) => {
            let points = if question.options.is_empty() {
                letter.points()
            } else {
                question.option(letter).ok_or(Rejection::Unoffered)?.points
            };
            if !(1..=5).contains(&points) {
                return Err(Rejection::OutOfRange);
            }
            (letter, points)
        }
    };

    Ok(Response {
        question_id: question.id.clone(),
        selection,
        points,
        comment: answer.comment.clone().filter(|c| !c.trim().is_empty()),
    })
}

fn push_unique(ids: &mut Vec<String>, id: &str) {
    if !ids.iter().any(|existing| existing == id) {
        ids.push(id.to_string());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::entities::AnswerOption;
    use crate::enums::Category;
    use crate::questionnaire::canonical_questions;

    fn three_questions() -> Vec<Question> {
        vec![
            Question::likert("q1", Category::Nutrition, "one", 1),
            Question::likert("q2", Category::Housing, "two", 2),
            Question::likert("q3", Category::Health, "three", 3),
        ]
    }

    #[test]
    fn complete_set_validates_in_questionnaire_order() {
        let answers = vec![
            Answer::points("q3", 1),
            Answer::letter("q1", OptionLetter::A),
            Answer::points("q2", 4).with_comment("minor wear on substrate"),
        ];
        let validated = validate_answers(&three_questions(), &answers, false).unwrap();

        assert!(validated.is_complete());
        let summary: Vec<(&str, OptionLetter, u8)> = validated
            .responses
            .iter()
            .map(|r| (r.question_id.as_str(), r.selection, r.points))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("q1", OptionLetter::A, 5),
                ("q2", OptionLetter::B, 4),
                ("q3", OptionLetter::E, 1),
            ]
        );
        assert_eq!(
            validated.responses[1].comment.as_deref(),
            Some("minor wear on substrate")
        );
    }

    #[test]
    fn missing_answers_rejected_without_confirmation() {
        let answers = vec![Answer::points("q1", 3)];
        let err = validate_answers(&three_questions(), &answers, false).unwrap_err();
        assert_eq!(err.missing, vec!["q2".to_string(), "q3".to_string()]);
        assert!(!err.has_invalid_answers());
    }

    #[test]
    fn missing_answers_accepted_with_confirmation() {
        let answers = vec![Answer::points("q2", 3)];
        let validated = validate_answers(&three_questions(), &answers, true).unwrap();
        assert_eq!(validated.responses.len(), 1);
        assert_eq!(validated.missing, vec!["q1".to_string(), "q3".to_string()]);
    }

    #[test]
    fn out_of_range_points_rejected_even_when_incomplete_allowed() {
        let answers = vec![Answer::points("q1", 0), Answer::points("q2", 6)];
        let err = validate_answers(&three_questions(), &answers, true).unwrap_err();
        assert_eq!(err.out_of_range, vec!["q1".to_string(), "q2".to_string()]);
    }

    #[test]
    fn unknown_question_rejected() {
        let mut answers: Vec<Answer> = ["q1", "q2", "q3"]
            .iter()
            .map(|id| Answer::points(*id, 5))
            .collect();
        answers.push(Answer::points("q99", 5));
        let err = validate_answers(&three_questions(), &answers, false).unwrap_err();
        assert_eq!(err.unknown, vec!["q99".to_string()]);
        assert!(err.missing.is_empty());
    }

    #[test]
    fn duplicate_answers_rejected() {
        let answers = vec![
            Answer::points("q1", 5),
            Answer::points("q1", 4),
            Answer::points("q1", 3),
            Answer::points("q2", 5),
            Answer::points("q3", 5),
        ];
        let err = validate_answers(&three_questions(), &answers, false).unwrap_err();
        assert_eq!(err.duplicated, vec!["q1".to_string()]);
    }

    #[test]
    fn unoffered_letter_rejected() {
        let mut questions = three_questions();
        questions[0].options = vec![
            AnswerOption {
                letter: OptionLetter::A,
                label: "Yes".into(),
                points: 5,
            },
            AnswerOption {
                letter: OptionLetter::C,
                label: "No".into(),
                points: 1,
            },
        ];
        let answers = vec![
            Answer::letter("q1", OptionLetter::B),
            Answer::points("q2", 5),
            Answer::points("q3", 5),
        ];
        let err = validate_answers(&questions, &answers, false).unwrap_err();
        assert_eq!(err.unoffered, vec!["q1".to_string()]);

        let answers = vec![
            Answer::points("q1", 4),
            Answer::points("q2", 5),
            Answer::points("q3", 5),
        ];
        let err = validate_answers(&questions, &answers, false).unwrap_err();
        assert_eq!(err.unoffered, vec!["q1".to_string()]);
    }

    #[test]
    fn explicit_option_points_override_letter_scale() {
        let mut questions = three_questions();
        questions[0].options = vec![
            AnswerOption {
                letter: OptionLetter::A,
                label: "Yes".into(),
                points: 5,
            },
            AnswerOption {
                letter: OptionLetter::C,
                label: "No".into(),
                points: 1,
            },
        ];
        let answers = vec![
            Answer::letter("q1", OptionLetter::C),
            Answer::points("q2", 5),
            Answer::points("q3", 5),
        ];
        let validated = validate_answers(&questions, &answers, false).unwrap();
        assert_eq!(validated.responses[0].points, 1);
        assert_eq!(validated.responses[0].selection, OptionLetter::C);
    }

    #[test]
    fn blank_comments_are_dropped() {
        let answers = vec![Answer::points("q1", 5).with_comment("   ")];
        let validated = validate_answers(&three_questions(), &answers, true).unwrap();
        assert!(validated.responses[0].comment.is_none());
    }

    #[test]
    fn error_message_lists_question_ids() {
        let answers = vec![Answer::points("q1", 9), Answer::points("zz", 1)];
        let err = validate_answers(&three_questions(), &answers, false).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("missing [q2, q3]"), "{msg}");
        assert!(msg.contains("unknown [zz]"), "{msg}");
        assert!(msg.contains("out of range [q1]"), "{msg}");
    }

    #[test]
    fn canonical_questionnaire_accepts_all_threes() {
        let questions = canonical_questions();
        let answers: Vec<Answer> = questions.iter().map(|q| Answer::points(&q.id, 3)).collect();
        let validated = validate_answers(&questions, &answers, false).unwrap();
        assert_eq!(validated.responses.len(), 18);
        assert!(validated.responses.iter().all(|r| r.selection == OptionLetter::C));
    }
}
