use chrono::{DateTime, Utc};
use clap::Subcommand;

/// Evaluation entity commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EvaluationCommands {
    /// Submit a completed questionnaire for an animal.
    Submit {
        #[arg(long)]
        animal: String,
        /// Answer as `QUESTION=LETTER` or `QUESTION=POINTS`, optionally `:comment`.
        #[arg(long = "answer", value_name = "ANSWER")]
        answers: Vec<String>,
        /// Accept a sheet with unanswered questions.
        #[arg(long)]
        allow_incomplete: bool,
        #[arg(long)]
        evaluator: Option<String>,
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        enclosure: Option<String>,
        /// Evaluator confidence, 1 (low) to 5 (high).
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        confidence: Option<u8>,
        /// Evaluation time (RFC 3339); defaults to now.
        #[arg(long)]
        at: Option<DateTime<Utc>>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List evaluations newest first.
    List {
        #[arg(long)]
        animal: Option<String>,
    },
    /// Get an evaluation with its responses and category breakdown.
    Get { id: String },
    /// Delete an evaluation.
    Delete { id: String },
}
