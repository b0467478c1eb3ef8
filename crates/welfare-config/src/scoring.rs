//! Scoring policy.

use serde::{Deserialize, Serialize};
use welfare_core::enums::ScoreDenominator;

/// How submitted questionnaires are scored.
///
/// `denominator = "questionnaire"` scores against every question (unanswered
/// ones count as zero); `"answered"` scores against the supplied responses only.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub denominator: ScoreDenominator,
}
