//! Evaluation repository.
//!
//! Submission validates the answer sheet against the stored questionnaire,
//! recomputes the global score and writes the evaluation and its responses
//! in one transaction. Stored evaluations are never updated.

use std::collections::HashMap;

use chrono::SubsecRound;
use welfare_core::engine::{score_responses, validate_answers};
use welfare_core::entities::{Evaluation, NewEvaluation, Response};
use welfare_core::ids::PREFIX_EVALUATION;

use crate::error::DatabaseError;
use crate::helpers::{
    format_datetime, get_opt_string, get_opt_u8, get_u8, non_blank, now, parse_datetime,
    parse_enum,
};
use crate::service::WelfareService;

/// Evaluator recorded when the submission leaves the name blank.
pub const DEFAULT_EVALUATOR: &str = "Welfare technician";

const EVALUATION_COLUMNS: &str = "id, animal_id, evaluated_at, evaluator, evaluator_role, \
     enclosure, confidence, global_score, notes, created_at";

/// Evaluation ids bound per response query.
const RESPONSE_BATCH: usize = 500;

fn row_to_evaluation(
    row: &libsql::Row,
    responses: Vec<Response>,
) -> Result<Evaluation, DatabaseError> {
    Ok(Evaluation {
        id: row.get::<String>(0)?,
        animal_id: row.get::<String>(1)?,
        evaluated_at: parse_datetime(&row.get::<String>(2)?)?,
        evaluator: row.get::<String>(3)?,
        evaluator_role: get_opt_string(row, 4)?,
        enclosure: get_opt_string(row, 5)?,
        confidence: get_opt_u8(row, 6)?,
        global_score: get_u8(row, 7)?,
        responses,
        notes: get_opt_string(row, 8)?,
        created_at: parse_datetime(&row.get::<String>(9)?)?,
    })
}

/// Columns: evaluation_id, question_id, selection, points, comment.
fn row_to_response(row: &libsql::Row) -> Result<(String, Response), DatabaseError> {
    Ok((
        row.get::<String>(0)?,
        Response {
            question_id: row.get::<String>(1)?,
            selection: parse_enum(&row.get::<String>(2)?)?,
            points: get_u8(row, 3)?,
            comment: get_opt_string(row, 4)?,
        },
    ))
}

impl WelfareService {
    /// Validate, score and store a new evaluation.
    ///
    /// Any score the caller may have computed is irrelevant: the stored
    /// `global_score` is always derived here from the validated responses.
    ///
    /// # Errors
    ///
    /// Returns a not-found error for an unknown animal, a validation error
    /// for a rejected answer sheet or confidence level, or `DatabaseError`
    /// if the transaction fails.
    pub async fn create_evaluation(
        &self,
        submission: NewEvaluation,
    ) -> Result<Evaluation, DatabaseError> {
        let animal = self.get_animal(&submission.animal_id).await?;

        if let Some(level) = submission.confidence {
            if !(1..=5).contains(&level) {
                return Err(DatabaseError::invalid(format!(
                    "confidence level must be between 1 and 5, got {level}"
                )));
            }
        }

        let validated = validate_answers(
            self.questions(),
            &submission.answers,
            submission.allow_incomplete,
        )?;
        if !validated.is_complete() {
            tracing::warn!(
                animal_id = %animal.id,
                missing = ?validated.missing,
                "accepting incomplete evaluation"
            );
        }

        let global_score = score_responses(
            &validated.responses,
            self.questions().len(),
            self.denominator(),
        );
        let evaluator = non_blank(Some(submission.evaluator.as_str()))
            .unwrap_or_else(|| DEFAULT_EVALUATOR.to_string());
        let created_at = now();
        let evaluated_at = submission
            .evaluated_at
            .map_or(created_at, |at| at.trunc_subsecs(6));
        let id = self.db().generate_id(PREFIX_EVALUATION).await?;

        let evaluation = Evaluation {
            id,
            animal_id: animal.id,
            evaluated_at,
            evaluator,
            evaluator_role: non_blank(submission.evaluator_role.as_deref()),
            enclosure: non_blank(submission.enclosure.as_deref()),
            confidence: submission.confidence,
            global_score,
            responses: validated.responses,
            notes: non_blank(submission.notes.as_deref()),
            created_at,
        };

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            &format!(
                "INSERT INTO evaluations ({EVALUATION_COLUMNS})
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)"
            ),
            libsql::params![
                evaluation.id.as_str(),
                evaluation.animal_id.as_str(),
                format_datetime(&evaluation.evaluated_at),
                evaluation.evaluator.as_str(),
                evaluation.evaluator_role.as_deref(),
                evaluation.enclosure.as_deref(),
                evaluation.confidence.map(i64::from),
                i64::from(evaluation.global_score),
                evaluation.notes.as_deref(),
                format_datetime(&evaluation.created_at)
            ],
        )
        .await?;
        for response in &evaluation.responses {
            tx.execute(
                "INSERT INTO responses (evaluation_id, question_id, selection, points, comment)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                libsql::params![
                    evaluation.id.as_str(),
                    response.question_id.as_str(),
                    response.selection.as_str(),
                    i64::from(response.points),
                    response.comment.as_deref()
                ],
            )
            .await?;
        }
        tx.commit().await?;

        tracing::info!(
            evaluation_id = %evaluation.id,
            animal_id = %evaluation.animal_id,
            score = evaluation.global_score,
            responses = evaluation.responses.len(),
            "stored evaluation"
        );
        Ok(evaluation)
    }

    /// Fetch one evaluation with its responses in questionnaire order.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no evaluation has this id.
    pub async fn get_evaluation(&self, id: &str) -> Result<Evaluation, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {EVALUATION_COLUMNS} FROM evaluations WHERE id = ?1"),
                [id],
            )
            .await?;
        let row = rows
            .next()
            .await?
            .ok_or_else(|| DatabaseError::not_found("evaluation", id))?;

        let mut responses = Vec::new();
        let mut response_rows = self
            .db()
            .conn()
            .query(
                "SELECT r.evaluation_id, r.question_id, r.selection, r.points, r.comment
                 FROM responses r LEFT JOIN questions q ON q.id = r.question_id
                 WHERE r.evaluation_id = ?1
                 ORDER BY q.position, r.question_id",
                [id],
            )
            .await?;
        while let Some(response_row) = response_rows.next().await? {
            responses.push(row_to_response(&response_row)?.1);
        }

        row_to_evaluation(&row, responses)
    }

    /// Evaluations newest first (`evaluated_at`, then id), optionally for
    /// one animal only. Responses are included.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a query fails or a row is malformed.
    pub async fn find_evaluations(
        &self,
        animal_id: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<Evaluation>, DatabaseError> {
        let limit_clause = limit.map(|n| format!(" LIMIT {n}")).unwrap_or_default();
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!(
                    "SELECT {EVALUATION_COLUMNS} FROM evaluations
                     WHERE ?1 IS NULL OR animal_id = ?1
                     ORDER BY evaluated_at DESC, id DESC{limit_clause}"
                ),
                libsql::params![animal_id],
            )
            .await?;

        let mut evaluations = Vec::new();
        while let Some(row) = rows.next().await? {
            evaluations.push(row_to_evaluation(&row, Vec::new())?);
        }
        // Responses only for the evaluations actually returned, batched to
        // stay under SQLite's bound-parameter limit.
        let mut by_evaluation: HashMap<String, Vec<Response>> = HashMap::new();
        for chunk in evaluations.chunks(RESPONSE_BATCH) {
            let placeholders = (1..=chunk.len())
                .map(|i| format!("?{i}"))
                .collect::<Vec<_>>()
                .join(", ");
            let ids: Vec<libsql::Value> = chunk.iter().map(|e| e.id.clone().into()).collect();
            let mut rows = self
                .db()
                .conn()
                .query(
                    &format!(
                        "SELECT r.evaluation_id, r.question_id, r.selection, r.points, r.comment
                         FROM responses r
                         LEFT JOIN questions q ON q.id = r.question_id
                         WHERE r.evaluation_id IN ({placeholders})
                         ORDER BY r.evaluation_id, q.position, r.question_id"
                    ),
                    libsql::params_from_iter(ids),
                )
                .await?;
            while let Some(row) = rows.next().await? {
                let (evaluation_id, response) = row_to_response(&row)?;
                by_evaluation.entry(evaluation_id).or_default().push(response);
            }
        }
        for evaluation in &mut evaluations {
            evaluation.responses = by_evaluation.remove(&evaluation.id).unwrap_or_default();
        }
        tracing::debug!(count = evaluations.len(), animal_id = ?animal_id, "listed evaluations");
        Ok(evaluations)
    }

    /// Delete one evaluation and its responses.
    ///
    /// # Errors
    ///
    /// Returns a not-found error when no evaluation has this id.
    pub async fn delete_evaluation(&self, id: &str) -> Result<(), DatabaseError> {
        let deleted = self
            .db()
            .conn()
            .execute("DELETE FROM evaluations WHERE id = ?1", [id])
            .await?;
        if deleted == 0 {
            return Err(DatabaseError::not_found("evaluation", id));
        }
        tracing::info!(evaluation_id = id, "deleted evaluation");
        Ok(())
    }
}
