//! Configuration validation support

use config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trait for validating configuration values
pub trait ValidateConfig: Serialize + for<'de> Deserialize<'de> {
    /// Validate the configuration
    ///
    /// Returns Ok(()) if valid, or an error describing what's wrong
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Common validation helpers
pub mod validators {
    use config::ConfigError;

    /// Validate that a string is not empty
    pub fn validate_not_empty(value: &str, field: &str) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::Message(format!("{field}: cannot be empty")));
        }
        Ok(())
    }

    /// Validate an absolute http(s) URL
    pub fn validate_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
        let parsed = url::Url::parse(url)
            .map_err(|e| ConfigError::Message(format!("{field}: invalid URL - {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Message(format!(
                "{field}: unsupported scheme '{}'",
                parsed.scheme()
            )));
        }
        Ok(())
    }

    /// Validate that a value is within range
    pub fn validate_range<T: PartialOrd + std::fmt::Display>(
        value: T,
        min: T,
        max: T,
        field: &str,
    ) -> Result<(), ConfigError> {
        if value < min || value > max {
            return Err(ConfigError::Message(format!(
                "{field}: must be between {min} and {max}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;

    #[test]
    fn test_http_url_rejects_other_schemes() {
        assert!(validate_http_url("https://shop.example.com", "api.base_url").is_ok());
        assert!(validate_http_url("ftp://shop.example.com", "api.base_url").is_err());
        assert!(validate_http_url("not a url", "api.base_url").is_err());
    }

    #[test]
    fn test_range_is_inclusive() {
        assert!(validate_range(0, 0, 300, "api.timeout_secs").is_ok());
        assert!(validate_range(300, 0, 300, "api.timeout_secs").is_ok());
        assert!(validate_range(301, 0, 300, "api.timeout_secs").is_err());
    }

    #[test]
    fn test_not_empty_trims() {
        assert!(validate_not_empty("   ", "api.user_agent").is_err());
    }
}
