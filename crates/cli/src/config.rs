//! CLI configuration resolution

use crate::Cli;
use anyhow::{Context, Result};
use std::path::PathBuf;
use storefront_core::{StateDir, StorefrontConfig, ValidateConfig};
use tracing::Level;

/// Build the effective configuration: file and environment first, then flags
pub fn resolve(cli: &Cli) -> Result<StorefrontConfig> {
    let state_dir = state_dir(cli.data_dir.clone());

    let mut config = if let Some(path) = &cli.config {
        StorefrontConfig::load_from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?
    } else if state_dir.config_path().exists() {
        StorefrontConfig::load_from_file(state_dir.config_path())
            .context("Failed to load config from state directory")?
    } else {
        StorefrontConfig::load().context("Failed to load configuration")?
    };

    if let Some(base_url) = &cli.base_url {
        config.api.base_url.clone_from(base_url);
    }
    if let Some(timeout) = cli.timeout {
        config.api.timeout_secs = timeout;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = Level::from(level.clone()).as_str().to_lowercase();
    }

    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// State directory from `--data-dir` / `STOREFRONT_STATE_DIR`, else platform default
pub fn state_dir(data_dir: Option<PathBuf>) -> StateDir {
    match data_dir {
        Some(dir) => StateDir::with_override(dir),
        None => StateDir::new(),
    }
}

/// Token file: explicit config wins over the state directory default
pub fn token_file(config: &StorefrontConfig, data_dir: Option<PathBuf>) -> PathBuf {
    config
        .storage
        .token_file
        .clone()
        .unwrap_or_else(|| state_dir(data_dir).token_file())
}
