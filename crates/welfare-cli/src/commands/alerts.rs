use serde::Serialize;
use welfare_core::engine::{Alert, classify_alerts};
use welfare_core::store::RecordStore;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AlertListResponse {
    alerts: Vec<Alert>,
}

/// Handle `welfare alerts`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (animals, evaluations) = tokio::try_join!(
        ctx.service.list_animals(),
        ctx.service.list_evaluations(None)
    )?;
    let mut alerts = classify_alerts(&animals, &evaluations);
    if let Some(limit) = flags.limit {
        alerts.truncate(usize::try_from(limit)?);
    }
    output(&AlertListResponse { alerts }, flags.format)
}
