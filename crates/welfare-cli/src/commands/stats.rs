use welfare_core::engine::animal_stats;
use welfare_core::store::RecordStore;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::StatsArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `welfare stats <animal-id>`.
pub async fn handle(args: &StatsArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    // Unknown ids are an error rather than an empty history.
    ctx.service.get_animal(&args.animal_id).await?;
    let evaluations = ctx.service.list_evaluations(Some(&args.animal_id)).await?;
    output(&animal_stats(&args.animal_id, &evaluations), flags.format)
}
