//! # welfare-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WELFARE_*` prefix, `__` as separator)
//! 2. Project-level `.welfare/config.toml`
//! 3. User-level `~/.config/welfare/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WELFARE_DATABASE__PATH` -> `database.path`,
//! `WELFARE_SCORING__DENOMINATOR` -> `scoring.denominator`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use welfare_config::WelfareConfig;
//!
//! let config = WelfareConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod database;
mod error;
mod general;
mod scoring;
mod storage;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use scoring::ScoringConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding project-local state and configuration.
pub const PROJECT_DIR: &str = ".welfare";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WelfareConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl WelfareConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load the configuration of the project rooted at `root`.
    ///
    /// The project-local file is read from `root/.welfare/config.toml` and
    /// relative database and upload paths are anchored at `root`, so the
    /// process working directory is left alone.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_in(root: &Path) -> Result<Self, ConfigError> {
        let mut config: Self = Self::figment_in(root).extract()?;
        config.validate()?;
        config.anchor_paths(root);
        Ok(config)
    }

    /// Build the figment provider chain relative to the current directory.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_in(Path::new(""))
    }

    /// Build the figment provider chain for the project rooted at `root`.
    #[must_use]
    pub fn figment_in(root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("WELFARE_").split("__"))
    }

    /// Reject values that parse but cannot be used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.storage.upload_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.upload_dir".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Rewrite relative file paths so they resolve under `root`.
    fn anchor_paths(&mut self, root: &Path) {
        if !self.database.is_in_memory() && Path::new(&self.database.path).is_relative() {
            self.database.path = root.join(&self.database.path).to_string_lossy().into_owned();
        }
        if Path::new(&self.storage.upload_dir).is_relative() {
            self.storage.upload_dir = root
                .join(&self.storage.upload_dir)
                .to_string_lossy()
                .into_owned();
        }
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("welfare").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use figment::Jail;
    use pretty_assertions::assert_eq;
    use welfare_core::enums::ScoreDenominator;

    use super::*;

    #[test]
    fn default_config_loads() {
        let config = WelfareConfig::default();
        assert_eq!(config.database.path, ".welfare/welfare.db");
        assert_eq!(config.scoring.denominator, ScoreDenominator::Questionnaire);
        assert_eq!(config.storage.url_prefix, "/files/");
        assert_eq!(config.general.default_limit, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn figment_builds_without_files() {
        Jail::expect_with(|_jail| {
            let config: WelfareConfig = WelfareConfig::figment().extract()?;
            assert_eq!(config.general.recent_activity, 10);
            assert!(!config.database.is_in_memory());
            Ok(())
        });
    }

    #[test]
    fn project_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_dir(".welfare")?;
            jail.create_file(
                ".welfare/config.toml",
                r#"
                [scoring]
                denominator = "answered"

                [general]
                recent_activity = 5
                "#,
            )?;
            let config: WelfareConfig = WelfareConfig::figment().extract()?;
            assert_eq!(config.scoring.denominator, ScoreDenominator::Answered);
            assert_eq!(config.general.recent_activity, 5);
            assert_eq!(config.general.default_limit, 20);
            Ok(())
        });
    }

    #[test]
    fn env_overrides_project_file() {
        Jail::expect_with(|jail| {
            jail.create_dir(".welfare")?;
            jail.create_file(
                ".welfare/config.toml",
                "[database]\npath = \"from-file.db\"\n",
            )?;
            jail.set_env("WELFARE_DATABASE__PATH", ":memory:");
            let config: WelfareConfig = WelfareConfig::figment().extract()?;
            assert!(config.database.is_in_memory());
            Ok(())
        });
    }

    #[test]
    fn load_in_reads_project_file_and_anchors_paths() {
        Jail::expect_with(|jail| {
            jail.create_dir("zoo/.welfare")?;
            jail.create_file(
                "zoo/.welfare/config.toml",
                "[storage]\nupload_dir = \"photos\"\n\n[general]\ndefault_limit = 7\n",
            )?;
            let root = jail.directory().join("zoo");

            let config = WelfareConfig::load_in(&root).unwrap();
            assert_eq!(config.general.default_limit, 7);
            assert_eq!(PathBuf::from(&config.storage.upload_dir), root.join("photos"));
            assert_eq!(
                PathBuf::from(&config.database.path),
                root.join(".welfare").join("welfare.db")
            );
            Ok(())
        });
    }

    #[test]
    fn load_in_keeps_absolute_and_in_memory_paths() {
        Jail::expect_with(|jail| {
            jail.set_env("WELFARE_DATABASE__PATH", ":memory:");
            jail.set_env("WELFARE_STORAGE__UPLOAD_DIR", "/srv/welfare/uploads");
            let config = WelfareConfig::load_in(jail.directory()).unwrap();
            assert!(config.database.is_in_memory());
            assert_eq!(config.storage.upload_dir, "/srv/welfare/uploads");
            Ok(())
        });
    }

    #[test]
    fn unknown_denominator_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("WELFARE_SCORING__DENOMINATOR", "median");
            let result: Result<WelfareConfig, _> = WelfareConfig::figment().extract();
            assert!(result.is_err());
            Ok(())
        });
    }

    #[test]
    fn validate_rejects_zero_limit() {
        let mut config = WelfareConfig::default();
        config.general.default_limit = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("general.default_limit"));
    }
}
