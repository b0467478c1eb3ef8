//! Questionnaire repository (read-only reference data).

use std::collections::BTreeMap;

use welfare_core::entities::{AnswerOption, Question};

use crate::WelfareDb;
use crate::error::DatabaseError;
use crate::helpers::{get_u8, parse_enum};
use crate::service::WelfareService;

/// Read the stored questionnaire with its option tables, in position order.
pub(crate) async fn load_questions(db: &WelfareDb) -> Result<Vec<Question>, DatabaseError> {
    let mut options: BTreeMap<String, Vec<AnswerOption>> = BTreeMap::new();
    let mut rows = db
        .conn()
        .query(
            "SELECT question_id, letter, label, points FROM question_options
             ORDER BY question_id, letter",
            (),
        )
        .await?;
    while let Some(row) = rows.next().await? {
        options
            .entry(row.get::<String>(0)?)
            .or_default()
            .push(AnswerOption {
                letter: parse_enum(&row.get::<String>(1)?)?,
                label: row.get::<String>(2)?,
                points: get_u8(&row, 3)?,
            });
    }

    let mut rows = db
        .conn()
        .query(
            "SELECT id, category, prompt, position FROM questions ORDER BY position",
            (),
        )
        .await?;
    let mut questions = Vec::new();
    while let Some(row) = rows.next().await? {
        let id = row.get::<String>(0)?;
        let position = u32::try_from(row.get::<i64>(3)?)
            .map_err(|e| DatabaseError::InvalidState(format!("question {id} position: {e}")))?;
        questions.push(Question {
            options: options.remove(&id).unwrap_or_default(),
            category: parse_enum(&row.get::<String>(1)?)?,
            prompt: row.get::<String>(2)?,
            position,
            id,
        });
    }
    Ok(questions)
}

impl WelfareService {
    /// Re-read the questionnaire from the database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or a row is malformed.
    pub async fn list_questions(&self) -> Result<Vec<Question>, DatabaseError> {
        load_questions(self.db()).await
    }
}
