use serde::Serialize;
use welfare_core::entities::Question;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::QuestionCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct QuestionListResponse {
    questions: Vec<Question>,
}

/// Handle `welfare question`.
pub async fn handle(
    action: &QuestionCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuestionCommands::List => {
            let questions = ctx.service.list_questions().await?;
            output(&QuestionListResponse { questions }, flags.format)
        }
    }
}
