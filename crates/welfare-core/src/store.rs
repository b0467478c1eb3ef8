//! The record-store seam.
//!
//! The engine never talks to storage directly. Callers inject a
//! `RecordStore` implementation (`welfare-db` provides the libSQL one) and
//! store errors pass through untouched as `Self::Error`.

use crate::entities::{Animal, Evaluation, NewEvaluation};

pub trait RecordStore {
    type Error;

    /// Every registered animal.
    fn list_animals(&self) -> impl Future<Output = Result<Vec<Animal>, Self::Error>>;

    /// Evaluations with their responses, optionally restricted to one animal.
    fn list_evaluations(
        &self,
        animal_id: Option<&str>,
    ) -> impl Future<Output = Result<Vec<Evaluation>, Self::Error>>;

    /// Validate, score and persist a new evaluation atomically.
    fn submit_evaluation(
        &self,
        submission: NewEvaluation,
    ) -> impl Future<Output = Result<Evaluation, Self::Error>>;
}
