//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

/// Default length of the dashboard's recent-activity log.
const fn default_recent_activity() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Number of evaluations shown in the dashboard's recent activity.
    #[serde(default = "default_recent_activity")]
    pub recent_activity: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            recent_activity: default_recent_activity(),
        }
    }
}
