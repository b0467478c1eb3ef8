//! Per-animal statistics and per-category breakdown.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::engine::fleet::average_score;
use crate::engine::score::normalize;
use crate::engine::trend::classify_trend;
use crate::entities::{Evaluation, Question, Response};
use crate::enums::{Category, Trend};

/// One point of an animal's score history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScorePoint {
    pub evaluation_id: String,
    pub evaluated_at: DateTime<Utc>,
    pub score: u8,
}

/// Score history summary for one animal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnimalStats {
    pub animal_id: String,
    pub count: usize,
    pub average: u8,
    pub latest: Option<u8>,
    pub trend: Trend,
    /// Ascending by time.
    pub series: Vec<ScorePoint>,
}

/// Build the statistics of `animal_id` from any evaluation collection.
///
/// Evaluations of other animals are ignored. The series is ordered by
/// `evaluated_at`, then by id, so the last point is the latest evaluation.
#[must_use]
pub fn animal_stats(animal_id: &str, evaluations: &[Evaluation]) -> AnimalStats {
    let mut own: Vec<&Evaluation> = evaluations
        .iter()
        .filter(|e| e.animal_id == animal_id)
        .collect();
    own.sort_by(|a, b| {
        a.evaluated_at
            .cmp(&b.evaluated_at)
            .then_with(|| a.id.cmp(&b.id))
    });

    let scores: Vec<u8> = own.iter().map(|e| e.global_score).collect();
    let series = own
        .iter()
        .map(|e| ScorePoint {
            evaluation_id: e.id.clone(),
            evaluated_at: e.evaluated_at,
            score: e.global_score,
        })
        .collect();

    AnimalStats {
        animal_id: animal_id.to_string(),
        count: scores.len(),
        average: average_score(&scores),
        latest: scores.last().copied(),
        trend: classify_trend(&scores),
        series,
    }
}

/// Normalized score of one category within a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryScore {
    pub category: Category,
    pub score: u8,
    pub answered: usize,
}

/// Per-category `round(100 * sum / (answered * 5))`, in taxonomy order.
///
/// Categories without any answered question are omitted, as are responses
/// whose question is not in `questions`.
#[must_use]
pub fn category_breakdown(questions: &[Question], responses: &[Response]) -> Vec<CategoryScore> {
    let category_of: BTreeMap<&str, Category> = questions
        .iter()
        .map(|q| (q.id.as_str(), q.category))
        .collect();

    let mut totals: BTreeMap<Category, (u64, usize)> = BTreeMap::new();
    for response in responses {
        let Some(&category) = category_of.get(response.question_id.as_str()) else {
            continue;
        };
        let entry = totals.entry(category).or_insert((0, 0));
        entry.0 += u64::from(response.points);
        entry.1 += 1;
    }

    Category::ALL
        .into_iter()
        .filter_map(|category| {
            let &(sum, answered) = totals.get(&category)?;
            Some(CategoryScore {
                category,
                score: normalize(sum, answered),
                answered,
            })
        })
        .collect()
}
