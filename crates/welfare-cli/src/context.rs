use anyhow::Context;
use welfare_config::WelfareConfig;
use welfare_db::photos::PhotoStore;
use welfare_db::service::WelfareService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: WelfareService,
    pub photos: PhotoStore,
    pub config: WelfareConfig,
}

impl AppContext {
    pub async fn init(config: WelfareConfig) -> anyhow::Result<Self> {
        let service = WelfareService::from_config(&config)
            .await
            .with_context(|| format!("failed to open database at {}", config.database.path))?;
        let photos = PhotoStore::from_config(&config.storage);
        tracing::debug!(
            database = %config.database.path,
            denominator = %config.scoring.denominator,
            "application context ready"
        );
        Ok(Self {
            service,
            photos,
            config,
        })
    }
}
