//! Storefront client configuration
//!
//! Sources are layered, later ones winning:
//!
//! 1. built-in defaults
//! 2. `storefront.toml` / `config/storefront.toml` in the working directory,
//!    or the file passed explicitly to [`StorefrontConfig::load_from_file`]
//! 3. environment variables prefixed `STOREFRONT__`, sections separated by
//!    `__` (e.g. `STOREFRONT__API__BASE_URL`)

use crate::validation::{ValidateConfig, validators};
use config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Remote API settings
    #[serde(default)]
    pub api: ApiConfig,
    /// Token storage settings
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging settings
    #[serde(default)]
    pub logging: LogConfig,
}

/// Auth and Catalog API settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiConfig {
    /// Origin the `/api/...` paths are resolved against
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds, 0 disables it
    #[serde(default)]
    pub timeout_secs: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Where session tokens are persisted
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Token file; defaults to `<data dir>/tokens.json`
    #[serde(default)]
    pub token_file: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level filter (e.g., "info", "storefront_frontend=debug")
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_user_agent() -> String {
    format!("storefront-client/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: 0,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl ValidateConfig for StorefrontConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validators::validate_http_url(&self.api.base_url, "api.base_url")?;
        validators::validate_range(self.api.timeout_secs, 0, 3600, "api.timeout_secs")?;
        validators::validate_not_empty(&self.api.user_agent, "api.user_agent")?;
        validators::validate_not_empty(&self.logging.level, "logging.level")?;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod loading {
    use super::StorefrontConfig;
    use crate::validation::ValidateConfig;
    use config::{Config, ConfigError, Environment, File};
    use std::path::Path;

    const ENV_PREFIX: &str = "STOREFRONT";

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .separator("__")
            .try_parsing(true)
    }

    impl StorefrontConfig {
        /// Load configuration from defaults, well-known files and environment
        pub fn load() -> Result<Self, ConfigError> {
            let mut builder =
                Config::builder().add_source(Config::try_from(&StorefrontConfig::default())?);

            let config_paths = ["storefront.toml", "config/storefront.toml"];
            for path in &config_paths {
                if Path::new(path).exists() {
                    builder = builder.add_source(File::with_name(path).required(false));
                }
            }

            let config: Self = builder.add_source(environment()).build()?.try_deserialize()?;
            config.validate()?;
            Ok(config)
        }

        /// Load configuration from a specific config file
        pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
            let config: Self = Config::builder()
                .add_source(Config::try_from(&StorefrontConfig::default())?)
                .add_source(File::from(path.as_ref()))
                .add_source(environment())
                .build()?
                .try_deserialize()?;
            config.validate()?;
            Ok(config)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_validate() {
        let config = StorefrontConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.timeout_secs, 0);
        assert!(config.storage.token_file.is_none());
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[api]\nbase_url = \"https://shop.example.com\"\ntimeout_secs = 15\n\n[storage]\ntoken_file = \"/var/lib/storefront/tokens.json\"\n"
        )
        .unwrap();

        let config = StorefrontConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://shop.example.com");
        assert_eq!(config.api.timeout_secs, 15);
        assert_eq!(config.api.user_agent, ApiConfig::default().user_agent);
        assert_eq!(
            config.storage.token_file,
            Some(PathBuf::from("/var/lib/storefront/tokens.json"))
        );
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[api]\nbase_url = \"shop.example.com\"\n").unwrap();

        assert!(StorefrontConfig::load_from_file(file.path()).is_err());
    }
}
