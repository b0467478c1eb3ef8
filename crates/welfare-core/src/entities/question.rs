use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Category, OptionLetter};

/// One labeled answer option of a question.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnswerOption {
    pub letter: OptionLetter,
    pub label: String,
    pub points: u8,
}

/// A questionnaire item. Static reference data, never mutated by users.
///
/// Options are the explicit per-letter point table. A plain 1–5 scale is the
/// case where the five letters carry `5, 4, 3, 2, 1` (see [`Question::likert`]).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Question {
    pub id: String,
    pub category: Category,
    pub prompt: String,
    pub position: u32,
    pub options: Vec<AnswerOption>,
}

impl Question {
    /// Build a question on the plain Likert scale.
    #[must_use]
    pub fn likert(
        id: impl Into<String>,
        category: Category,
        prompt: impl Into<String>,
        position: u32,
    ) -> Self {
        let options = OptionLetter::ALL
            .into_iter()
            .map(|letter| AnswerOption {
                letter,
                label: likert_label(letter).to_string(),
                points: letter.points(),
            })
            .collect();
        Self {
            id: id.into(),
            category,
            prompt: prompt.into(),
            position,
            options,
        }
    }

    /// Look up the option offered under `letter`.
    #[must_use]
    pub fn option(&self, letter: OptionLetter) -> Option<&AnswerOption> {
        self.options.iter().find(|opt| opt.letter == letter)
    }

    /// Look up the option worth `points`, if the question offers one.
    #[must_use]
    pub fn option_for_points(&self, points: u8) -> Option<&AnswerOption> {
        self.options.iter().find(|opt| opt.points == points)
    }
}

const fn likert_label(letter: OptionLetter) -> &'static str {
    match letter {
        OptionLetter::A => "Fully meets",
        OptionLetter::B => "Mostly meets",
        OptionLetter::C => "Partially meets",
        OptionLetter::D => "Barely meets",
        OptionLetter::E => "Does not meet",
    }
}
