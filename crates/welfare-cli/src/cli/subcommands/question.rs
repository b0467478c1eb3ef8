use clap::Subcommand;

/// Questionnaire commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuestionCommands {
    /// List the questionnaire in order with its answer options.
    List,
}
