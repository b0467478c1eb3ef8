//! Categories, answer letters, trend directions and status bands.
//!
//! All enums serialize in `snake_case` except [`OptionLetter`], which keeps the
//! upper-case letter used on the questionnaire sheet.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Welfare domain a question belongs to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Nutrition,
    Housing,
    Health,
    Behavior,
    Emotional,
    Environment,
}

impl Category {
    /// Taxonomy order, used for breakdown output.
    pub const ALL: [Self; 6] = [
        Self::Nutrition,
        Self::Housing,
        Self::Health,
        Self::Behavior,
        Self::Emotional,
        Self::Environment,
    ];

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nutrition => "nutrition",
            Self::Housing => "housing",
            Self::Health => "health",
            Self::Behavior => "behavior",
            Self::Emotional => "emotional",
            Self::Environment => "environment",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OptionLetter
// ---------------------------------------------------------------------------

/// Letter of a questionnaire answer option.
///
/// On the plain Likert scale the letters map to points as
/// `A=5, B=4, C=3, D=2, E=1`. The mapping is a bijection over `1..=5`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
    E,
}

impl OptionLetter {
    pub const ALL: [Self; 5] = [Self::A, Self::B, Self::C, Self::D, Self::E];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
        }
    }

    /// Points this letter carries on the plain Likert scale.
    #[must_use]
    pub const fn points(self) -> u8 {
        match self {
            Self::A => 5,
            Self::B => 4,
            Self::C => 3,
            Self::D => 2,
            Self::E => 1,
        }
    }

    /// Inverse of [`points`](Self::points). `None` outside `1..=5`.
    #[must_use]
    pub const fn from_points(points: u8) -> Option<Self> {
        match points {
            5 => Some(Self::A),
            4 => Some(Self::B),
            3 => Some(Self::C),
            2 => Some(Self::D),
            1 => Some(Self::E),
            _ => None,
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionLetter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Self::A),
            "B" | "b" => Ok(Self::B),
            "C" | "c" => Ok(Self::C),
            "D" | "d" => Ok(Self::D),
            "E" | "e" => Ok(Self::E),
            other => Err(format!("unknown option letter '{other}'")),
        }
    }
}

// ---------------------------------------------------------------------------
// Trend
// ---------------------------------------------------------------------------

/// Local direction of an animal's welfare, from its two most recent scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    NoData,
    Stable,
    Ascending,
    Descending,
}

impl Trend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoData => "no_data",
            Self::Stable => "stable",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Presentation band of a per-animal alert.
///
/// ```text
/// score < 60        → critical
/// 60 <= score < 75  → warning
/// score >= 75       → no alert
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    Warning,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// WelfareStatus
// ---------------------------------------------------------------------------

/// Fleet-wide status label derived from the average global score.
///
/// ```text
/// avg < 60        → critical
/// 60 <= avg < 85  → stable
/// avg >= 85       → optimal
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum WelfareStatus {
    Critical,
    Stable,
    Optimal,
}

impl WelfareStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Stable => "stable",
            Self::Optimal => "optimal",
        }
    }
}

impl fmt::Display for WelfareStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ScoreDenominator
// ---------------------------------------------------------------------------

/// What an incomplete questionnaire is scored against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScoreDenominator {
    /// Every question of the questionnaire counts; unanswered ones contribute zero.
    #[default]
    Questionnaire,
    /// Only the supplied responses count.
    Answered,
}

impl ScoreDenominator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Questionnaire => "questionnaire",
            Self::Answered => "answered",
        }
    }
}

impl fmt::Display for ScoreDenominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
