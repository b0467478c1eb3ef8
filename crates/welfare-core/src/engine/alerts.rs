//! Per-animal risk alerts.
//!
//! An animal is at risk when its most recent evaluation scores below
//! [`ALERT_THRESHOLD`]. Most recent means greatest `evaluated_at`; identical
//! timestamps are broken by the greater evaluation id.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Animal, Evaluation};
use crate::enums::Severity;

/// Scores strictly below this raise an alert.
pub const ALERT_THRESHOLD: u8 = 75;

/// Scores strictly below this are critical rather than a warning.
pub const CRITICAL_THRESHOLD: u8 = 60;

/// An animal whose latest score is below the alert threshold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Alert {
    pub animal: Animal,
    pub score: u8,
    pub severity: Severity,
    pub evaluation_id: String,
    pub evaluated_at: DateTime<Utc>,
}

/// Presentation band for a latest score. `None` when no alert applies.
#[must_use]
pub const fn severity_for(score: u8) -> Option<Severity> {
    if score < CRITICAL_THRESHOLD {
        Some(Severity::Critical)
    } else if score < ALERT_THRESHOLD {
        Some(Severity::Warning)
    } else {
        None
    }
}

/// Ordering key deciding which of two evaluations is more recent.
fn recency(evaluation: &Evaluation) -> (DateTime<Utc>, &str) {
    (evaluation.evaluated_at, evaluation.id.as_str())
}

/// Most recent evaluation of every animal that has at least one.
#[must_use]
pub fn latest_per_animal(evaluations: &[Evaluation]) -> BTreeMap<&str, &Evaluation> {
    let mut latest: BTreeMap<&str, &Evaluation> = BTreeMap::new();
    for evaluation in evaluations {
        latest
            .entry(evaluation.animal_id.as_str())
            .and_modify(|current| {
                if recency(evaluation) > recency(current) {
                    *current = evaluation;
                }
            })
            .or_insert(evaluation);
    }
    latest
}

/// Latest global score of one animal, if it was ever evaluated.
#[must_use]
pub fn latest_score(animal_id: &str, evaluations: &[Evaluation]) -> Option<u8> {
    evaluations
        .iter()
        .filter(|e| e.animal_id == animal_id)
        .max_by(|a, b| recency(a).cmp(&recency(b)))
        .map(|e| e.global_score)
}

/// Derive the alert list from the full evaluation history.
///
/// Sorted ascending by score (worst first), ties by animal id. Animals with
/// no evaluations are excluded, as are evaluations of animals not present
/// in `animals`.
#[must_use]
pub fn classify_alerts(animals: &[Animal], evaluations: &[Evaluation]) -> Vec<Alert> {
    let latest = latest_per_animal(evaluations);

    let mut alerts: Vec<Alert> = animals
        .iter()
        .filter_map(|animal| {
            let evaluation = latest.get(animal.id.as_str())?;
            let severity = severity_for(evaluation.global_score)?;
            Some(Alert {
                animal: animal.clone(),
                score: evaluation.global_score,
                severity,
                evaluation_id: evaluation.id.clone(),
                evaluated_at: evaluation.evaluated_at,
            })
        })
        .collect();

    alerts.sort_by(|a, b| {
        a.score
            .cmp(&b.score)
            .then_with(|| a.animal.id.cmp(&b.animal.id))
    });
    alerts
}
