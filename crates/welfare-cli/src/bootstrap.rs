use std::path::{Path, PathBuf};

use anyhow::Context;
use welfare_config::{PROJECT_DIR, WelfareConfig};

use crate::cli::GlobalFlags;

/// Resolve the project directory, load its `.env`, then the layered config.
///
/// Relative paths in the configuration (database, uploads) resolve against
/// the project directory. The working directory is not changed, so relative
/// command arguments such as photo paths still resolve where the user ran
/// the command.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<WelfareConfig> {
    let root = match &flags.project {
        Some(project) => project_root(project)?,
        None => std::env::current_dir().context("failed to determine current directory")?,
    };

    let env_path = root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }

    WelfareConfig::load_in(&root).context("failed to load welfare configuration")
}

/// Accept either the project directory or its `.welfare` state directory.
fn project_root(project: &Path) -> anyhow::Result<PathBuf> {
    if project
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name == PROJECT_DIR)
    {
        return project
            .parent()
            .map(Path::to_path_buf)
            .context("invalid --project path: '.welfare' directory has no parent");
    }

    if project.is_dir() {
        return Ok(project.to_path_buf());
    }

    anyhow::bail!(
        "invalid --project '{}': directory does not exist",
        project.display()
    );
}
