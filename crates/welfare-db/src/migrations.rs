//! Database migration runner.
//!
//! Embeds the SQL migration files at compile time and executes them on
//! database open, then seeds the canonical questionnaire. Both steps are
//! idempotent.

use welfare_core::questionnaire::canonical_questions;

use crate::WelfareDb;
use crate::error::DatabaseError;

/// Initial schema: 5 tables, 3 indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl WelfareDb {
    /// Run all embedded migrations in sequence, then seed reference data.
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        self.seed_questions()
            .await
            .map_err(|e| DatabaseError::Migration(format!("seed_questions: {e}")))?;
        Ok(())
    }

    /// Insert any canonical question or option not yet present.
    async fn seed_questions(&self) -> Result<(), DatabaseError> {
        let tx = self.conn.transaction().await?;
        let mut inserted = 0u64;
        for question in canonical_questions() {
            inserted += tx
                .execute(
                    "INSERT OR IGNORE INTO questions (id, category, prompt, position)
                     VALUES (?1, ?2, ?3, ?4)",
                    libsql::params![
                        question.id.as_str(),
                        question.category.as_str(),
                        question.prompt.as_str(),
                        i64::from(question.position)
                    ],
                )
                .await?;
            for option in &question.options {
                tx.execute(
                    "INSERT OR IGNORE INTO question_options (question_id, letter, label, points)
                     VALUES (?1, ?2, ?3, ?4)",
                    libsql::params![
                        question.id.as_str(),
                        option.letter.as_str(),
                        option.label.as_str(),
                        i64::from(option.points)
                    ],
                )
                .await?;
            }
        }
        tx.commit().await?;
        if inserted > 0 {
            tracing::info!(inserted, "seeded questionnaire");
        }
        Ok(())
    }
}
