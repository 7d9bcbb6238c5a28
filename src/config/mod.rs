//! Configuration for the triagem service

mod http;
mod logging;
mod paths;
mod pipeline;

pub use http::HttpConfig;
pub use logging::{LogFormat, LogLevel, LoggingConfig};
pub use paths::PathsConfig;
pub use pipeline::PipelineConfig;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Main configuration for the triagem service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Filesystem locations the service operates on
    #[serde(default)]
    pub paths: PathsConfig,
    /// Classification pipeline parameters
    #[serde(default)]
    pub pipeline: PipelineConfig,
    /// HTTP API server configuration
    #[serde(default)]
    pub http: HttpConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file and validate it.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file '{}': {}", path.display(), e))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config file '{}': {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load the config file if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate all configuration fields.
    ///
    /// Collects all validation errors and reports them together so the user
    /// can fix everything in one pass.
    pub fn validate(&self) -> Result<()> {
        let mut errors: Vec<String> = Vec::new();

        if self.pipeline.max_vocabulary == 0 {
            errors.push("pipeline.max_vocabulary must be positive".to_string());
        }
        if self.pipeline.smoothing <= 0.0 {
            errors.push("pipeline.smoothing must be positive".to_string());
        }
        if !(self.pipeline.test_fraction > 0.0 && self.pipeline.test_fraction < 1.0) {
            errors.push("pipeline.test_fraction must be between 0 and 1 exclusive".to_string());
        }
        if self.http.listen_addr.parse::<SocketAddr>().is_err() {
            errors.push(format!(
                "http.listen_addr '{}' is not a valid socket address",
                self.http.listen_addr
            ));
        }
        if self.paths.training_dir.as_os_str().is_empty() {
            errors.push("paths.training_dir must not be empty".to_string());
        }
        if self.paths.model_path.as_os_str().is_empty() {
            errors.push("paths.model_path must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            anyhow::bail!("Invalid configuration:\n  - {}", errors.join("\n  - "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validation_collects_all_errors() {
        let mut config = Config::default();
        config.pipeline.max_vocabulary = 0;
        config.pipeline.test_fraction = 1.5;
        config.http.listen_addr = "not-an-address".to_string();

        let message = config.validate().unwrap_err().to_string();
        assert!(message.contains("max_vocabulary"));
        assert!(message.contains("test_fraction"));
        assert!(message.contains("listen_addr"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [paths]
            training_dir = "corpus"

            [http]
            listen_addr = "0.0.0.0:9000"
            "#,
        )
        .unwrap();

        assert_eq!(config.paths.training_dir, std::path::PathBuf::from("corpus"));
        assert_eq!(config.http.listen_addr, "0.0.0.0:9000");
        assert_eq!(config.pipeline.max_vocabulary, 10_000);
        assert!((config.pipeline.test_fraction - 0.2).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }
}
