//! Shared test utilities for welfare-db tests.

use chrono::NaiveDate;
use welfare_core::entities::{Animal, Answer, NewEvaluation};
use welfare_core::enums::ScoreDenominator;

use crate::service::WelfareService;
use crate::updates::animal::NewAnimal;

/// Create an in-memory service using the default denominator policy.
pub async fn test_service() -> WelfareService {
    test_service_with(ScoreDenominator::Questionnaire).await
}

pub async fn test_service_with(denominator: ScoreDenominator) -> WelfareService {
    WelfareService::new_local(":memory:", denominator)
        .await
        .unwrap()
}

/// Register an animal with fixed species and birth date.
pub async fn add_animal(svc: &WelfareService, name: &str) -> Animal {
    svc.create_animal(NewAnimal {
        name: name.to_string(),
        species: "Panthera leo".to_string(),
        birth_date: NaiveDate::from_ymd_opt(2016, 11, 3).unwrap(),
        photo_url: None,
        notes: None,
    })
    .await
    .unwrap()
}

/// A complete answer sheet giving every question the same points.
pub fn uniform_answers(svc: &WelfareService, points: u8) -> Vec<Answer> {
    svc.questions()
        .iter()
        .map(|q| Answer::points(q.id.as_str(), points))
        .collect()
}

pub fn submission(animal_id: &str, answers: Vec<Answer>) -> NewEvaluation {
    NewEvaluation {
        animal_id: animal_id.to_string(),
        evaluator: "Dr. Smith".to_string(),
        answers,
        ..NewEvaluation::default()
    }
}
