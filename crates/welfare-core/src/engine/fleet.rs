//! Fleet-level aggregate for the dashboard.
//!
//! Thresholds here are coarser than, and independent of, the per-animal
//! alert bands in [`alerts`](crate::engine::alerts).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::score::round_half_up;
use crate::entities::Evaluation;
use crate::enums::WelfareStatus;

/// Averages strictly below this are critical.
pub const STABLE_FROM: u8 = 60;

/// Averages at or above this are optimal.
pub const OPTIMAL_FROM: u8 = 85;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FleetSummary {
    pub average: u8,
    pub status: WelfareStatus,
    pub evaluation_count: usize,
}

/// Rounded mean of global scores. 0 when empty.
#[must_use]
pub fn average_score(scores: &[u8]) -> u8 {
    if scores.is_empty() {
        return 0;
    }
    let sum: u64 = scores.iter().map(|&s| u64::from(s)).sum();
    let avg = round_half_up(sum, scores.len() as u64);
    u8::try_from(avg).unwrap_or(u8::MAX)
}

#[must_use]
pub const fn status_for(average: u8) -> WelfareStatus {
    if average < STABLE_FROM {
        WelfareStatus::Critical
    } else if average < OPTIMAL_FROM {
        WelfareStatus::Stable
    } else {
        WelfareStatus::Optimal
    }
}

/// Summarize every evaluation across every animal.
#[must_use]
pub fn summarize_fleet(evaluations: &[Evaluation]) -> FleetSummary {
    let scores: Vec<u8> = evaluations.iter().map(|e| e.global_score).collect();
    let average = average_score(&scores);
    FleetSummary {
        average,
        status: status_for(average),
        evaluation_count: scores.len(),
    }
}
