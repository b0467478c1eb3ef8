//! Dashboard overview: totals, fleet aggregate, alerts and recent activity.
//!
//! Animals and evaluations are fetched concurrently; both must succeed, and
//! the first failure aborts the overview with the store's own error.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::alerts::{Alert, classify_alerts};
use crate::engine::fleet::{FleetSummary, summarize_fleet};
use crate::entities::{Animal, Evaluation};
use crate::store::RecordStore;

/// One row of the recent-activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RecentEvaluation {
    pub evaluation_id: String,
    pub animal_id: String,
    pub animal_name: Option<String>,
    pub evaluator: String,
    pub score: u8,
    pub evaluated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Overview {
    pub total_animals: usize,
    pub total_evaluations: usize,
    pub fleet: FleetSummary,
    pub alerts: Vec<Alert>,
    /// Newest first.
    pub recent: Vec<RecentEvaluation>,
}

/// Fetch everything the dashboard needs and derive the overview.
///
/// # Errors
///
/// Returns the store's error if either fetch fails.
pub async fn load_overview<S: RecordStore>(
    store: &S,
    recent_limit: usize,
) -> Result<Overview, S::Error> {
    let (animals, evaluations) =
        futures::try_join!(store.list_animals(), store.list_evaluations(None))?;
    Ok(build_overview(&animals, &evaluations, recent_limit))
}

/// Derive the overview from already-fetched data.
#[must_use]
pub fn build_overview(
    animals: &[Animal],
    evaluations: &[Evaluation],
    recent_limit: usize,
) -> Overview {
    let names: HashMap<&str, &str> = animals
        .iter()
        .map(|a| (a.id.as_str(), a.name.as_str()))
        .collect();

    let mut recent: Vec<&Evaluation> = evaluations.iter().collect();
    recent.sort_by(|a, b| {
        b.evaluated_at
            .cmp(&a.evaluated_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    let recent = recent
        .into_iter()
        .take(recent_limit)
        .map(|e| RecentEvaluation {
            evaluation_id: e.id.clone(),
            animal_id: e.animal_id.clone(),
            animal_name: names.get(e.animal_id.as_str()).map(|n| (*n).to_string()),
            evaluator: e.evaluator.clone(),
            score: e.global_score,
            evaluated_at: e.evaluated_at,
        })
        .collect();

    Overview {
        total_animals: animals.len(),
        total_evaluations: evaluations.len(),
        fleet: summarize_fleet(evaluations),
        alerts: classify_alerts(animals, evaluations),
        recent,
    }
}
