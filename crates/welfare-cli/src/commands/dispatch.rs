use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Animal { action } => commands::animal::handle(&action, ctx, flags).await,
        Commands::Question { action } => commands::question::handle(&action, ctx, flags).await,
        Commands::Evaluation { action } => commands::evaluation::handle(&action, ctx, flags).await,
        Commands::Dashboard => commands::dashboard::handle(ctx, flags).await,
        Commands::Alerts => commands::alerts::handle(ctx, flags).await,
        Commands::Stats(args) => commands::stats::handle(&args, ctx, flags).await,
    }
}
