//! libSQL implementation of the engine's record-store seam.

use welfare_core::entities::{Animal, Evaluation, NewEvaluation};
use welfare_core::store::RecordStore;

use crate::error::DatabaseError;
use crate::service::WelfareService;

impl RecordStore for WelfareService {
    type Error = DatabaseError;

    async fn list_animals(&self) -> Result<Vec<Animal>, DatabaseError> {
        self.search_animals(None, None).await
    }

    async fn list_evaluations(
        &self,
        animal_id: Option<&str>,
    ) -> Result<Vec<Evaluation>, DatabaseError> {
        self.find_evaluations(animal_id, None).await
    }

    async fn submit_evaluation(
        &self,
        submission: NewEvaluation,
    ) -> Result<Evaluation, DatabaseError> {
        self.create_evaluation(submission).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use welfare_core::engine::{animal_stats, classify_alerts};
    use welfare_core::enums::{Severity, Trend, WelfareStatus};
    use welfare_core::overview::load_overview;

    use super::*;
    use crate::test_support::{add_animal, submission, test_service, uniform_answers};

    #[tokio::test]
    async fn overview_over_stored_records() {
        let svc = test_service().await;
        let a = add_animal(&svc, "A").await;
        let b = add_animal(&svc, "B").await;
        let c = add_animal(&svc, "C").await;
        add_animal(&svc, "Unevaluated").await;

        // 5s -> 100, 3s -> 60, 2s -> 40
        for (animal, points) in [(&a, 5), (&b, 3), (&c, 2)] {
            svc.submit_evaluation(submission(&animal.id, uniform_answers(&svc, points)))
                .await
                .unwrap();
        }

        let overview = load_overview(&svc, 10).await.unwrap();
        assert_eq!(overview.total_animals, 4);
        assert_eq!(overview.total_evaluations, 3);
        assert_eq!(overview.fleet.average, 67);
        assert_eq!(overview.fleet.status, WelfareStatus::Stable);

        let alerts: Vec<(&str, u8, Severity)> = overview
            .alerts
            .iter()
            .map(|al| (al.animal.name.as_str(), al.score, al.severity))
            .collect();
        assert_eq!(
            alerts,
            vec![("C", 40, Severity::Critical), ("B", 60, Severity::Warning)]
        );
        assert_eq!(overview.recent.len(), 3);
    }

    #[tokio::test]
    async fn stats_and_alerts_follow_latest_evaluation() {
        let svc = test_service().await;
        let kiara = add_animal(&svc, "Kiara").await;
        let t0 = Utc.with_ymd_and_hms(2026, 4, 1, 8, 0, 0).unwrap();

        for (day, points) in [(0, 5), (30, 2)] {
            let mut new = submission(&kiara.id, uniform_answers(&svc, points));
            new.evaluated_at = Some(t0 + Duration::days(day));
            svc.submit_evaluation(new).await.unwrap();
        }

        let animals = svc.list_animals().await.unwrap();
        let evaluations = svc.list_evaluations(Some(&kiara.id)).await.unwrap();

        let stats = animal_stats(&kiara.id, &evaluations);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.average, 70);
        assert_eq!(stats.latest, Some(40));
        assert_eq!(stats.trend, Trend::Descending);

        let alerts = classify_alerts(&animals, &evaluations);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, Severity::Critical);
    }
}
