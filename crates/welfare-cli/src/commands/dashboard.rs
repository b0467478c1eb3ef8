use welfare_core::overview::load_overview;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `welfare dashboard`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let recent = usize::try_from(ctx.config.general.recent_activity)?;
    let overview = load_overview(&ctx.service, recent).await?;
    output(&overview, flags.format)
}
