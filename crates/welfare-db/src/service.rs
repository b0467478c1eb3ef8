//! Service layer hosting every repository method.
//!
//! `WelfareService` wraps `WelfareDb` together with the questionnaire loaded
//! at open time and the configured score denominator. All repo methods are
//! implemented as `impl WelfareService` blocks under `repos/`.

use welfare_config::WelfareConfig;
use welfare_core::entities::Question;
use welfare_core::enums::ScoreDenominator;

use crate::WelfareDb;
use crate::error::DatabaseError;

pub struct WelfareService {
    db: WelfareDb,
    questions: Vec<Question>,
    denominator: ScoreDenominator,
}

impl WelfareService {
    /// Open a local database and load its questionnaire.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    /// * `denominator` - How missing answers count against the global score.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or the
    /// questionnaire cannot be read.
    pub async fn new_local(
        db_path: &str,
        denominator: ScoreDenominator,
    ) -> Result<Self, DatabaseError> {
        let db = WelfareDb::open_local(db_path).await?;
        Self::from_db(db, denominator).await
    }

    /// Open the database named by the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn from_config(config: &WelfareConfig) -> Result<Self, DatabaseError> {
        Self::new_local(&config.database.path, config.scoring.denominator).await
    }

    /// Wrap an already opened database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the questionnaire cannot be read.
    pub async fn from_db(
        db: WelfareDb,
        denominator: ScoreDenominator,
    ) -> Result<Self, DatabaseError> {
        let questions = crate::repos::question::load_questions(&db).await?;
        if questions.is_empty() {
            return Err(DatabaseError::InvalidState(
                "questionnaire table is empty".into(),
            ));
        }
        Ok(Self {
            db,
            questions,
            denominator,
        })
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &WelfareDb {
        &self.db
    }

    /// The questionnaire in position order.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub const fn denominator(&self) -> ScoreDenominator {
        self.denominator
    }
}
