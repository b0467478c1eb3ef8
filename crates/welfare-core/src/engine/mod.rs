//! Welfare scoring engine.
//!
//! Pure functions over data already fetched from the record store. No I/O,
//! no shared state; every call re-derives its result from its inputs.

pub mod alerts;
pub mod fleet;
pub mod score;
pub mod stats;
pub mod trend;
pub mod validation;

pub use alerts::{Alert, classify_alerts, latest_per_animal, latest_score, severity_for};
pub use fleet::{FleetSummary, average_score, status_for, summarize_fleet};
pub use score::{normalize, normalized_score, score_responses};
pub use stats::{AnimalStats, CategoryScore, ScorePoint, animal_stats, category_breakdown};
pub use trend::classify_trend;
pub use validation::{ValidatedResponses, ValidationError, validate_answers};
