use clap::{Args, Subcommand};

use crate::cli::subcommands::{AnimalCommands, EvaluationCommands, QuestionCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Animals in care.
    Animal {
        #[command(subcommand)]
        action: AnimalCommands,
    },
    /// The welfare questionnaire.
    Question {
        #[command(subcommand)]
        action: QuestionCommands,
    },
    /// Welfare evaluations.
    Evaluation {
        #[command(subcommand)]
        action: EvaluationCommands,
    },
    /// Fleet overview: totals, average score, alerts and recent activity.
    Dashboard,
    /// Animals whose latest score is below the alert threshold.
    Alerts,
    /// Score history, average and trend of one animal.
    Stats(StatsArgs),
}

#[derive(Clone, Debug, Args)]
pub struct StatsArgs {
    /// Animal ID.
    pub animal_id: String,
}
