//! Local trend classification.

use crate::enums::Trend;

/// Classify the direction of an ascending-by-time score series.
///
/// Only the final pair is compared; this is a local trend, not a regression.
#[must_use]
pub fn classify_trend(scores: &[u8]) -> Trend {
    match scores {
        [] => Trend::NoData,
        [_] => Trend::Stable,
        [.., prev, last] if last > prev => Trend::Ascending,
        [.., prev, last] if last < prev => Trend::Descending,
        _ => Trend::Stable,
    }
}
