//! Application configuration: backend client, logging, and benchmark settings.
//!
//! Loaded from TOML with every field optional; missing fields take their
//! defaults. A handful of environment variables override the file.

use std::path::{Path, PathBuf};

use docsearch_client::{ClientConfig, EndpointContract};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Overrides `client.base_url`.
pub const ENV_BASE_URL: &str = "DOCSEARCH_BASE_URL";
/// Overrides `client.contract` (`split` or `unified`).
pub const ENV_CONTRACT: &str = "DOCSEARCH_CONTRACT";
/// Overrides the directory holding `config.toml`.
pub const ENV_CONFIG_DIR: &str = "DOCSEARCH_CONFIG_DIR";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Backend connection settings.
    pub client: ClientConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
    /// Latency benchmark settings.
    pub bench: BenchSettings,
}

/// Log output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "docsearch=info,docsearch_client=info".to_owned(),
        }
    }
}

/// Benchmark configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchSettings {
    /// Searches issued per query length and scenario.
    pub samples_per_length: usize,
    /// Ranking strategies to benchmark against each mode.
    pub rankings: Vec<String>,
}

impl Default for BenchSettings {
    fn default() -> Self {
        Self {
            samples_per_length: 6,
            rankings: vec!["occurrences".to_owned(), "closeness".to_owned()],
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load from `path` if given, else from the default path if it exists,
    /// else defaults. Environment overrides are applied last.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit or existing file cannot be loaded, or
    /// an override is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let default_path = Self::default_config_path();
                if default_path.is_file() {
                    Self::from_file(&default_path)?
                } else {
                    Self::default()
                }
            }
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `DOCSEARCH_BASE_URL` and `DOCSEARCH_CONTRACT`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Config`] for an unknown contract name.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(
            std::env::var(ENV_BASE_URL).ok(),
            std::env::var(ENV_CONTRACT).ok(),
        )
    }

    fn apply_overrides(&mut self, base_url: Option<String>, contract: Option<String>) -> Result<()> {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            tracing::debug!(%url, "base_url overridden from environment");
            self.client.base_url = url;
        }
        if let Some(name) = contract {
            self.client.contract = name.parse::<EndpointContract>().map_err(AppError::Config)?;
        }
        Ok(())
    }

    /// Validate all sections.
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found.
    pub fn validate(&self) -> Result<()> {
        self.client.validate()?;
        if self.bench.samples_per_length == 0 {
            return Err(AppError::Config(
                "bench.samples_per_length must be greater than 0".into(),
            ));
        }
        if self.bench.rankings.is_empty() {
            return Err(AppError::Config(
                "bench.rankings must name at least one ranking".into(),
            ));
        }
        Ok(())
    }

    /// Returns the default config file path: `<config dir>/docsearch/config.toml`.
    pub fn default_config_path() -> PathBuf {
        config_dir().join("config.toml")
    }
}

/// Application config directory.
///
/// Resolves to `dirs::config_dir()/docsearch/` by default. Override with the
/// `DOCSEARCH_CONFIG_DIR` environment variable.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os(ENV_CONFIG_DIR) {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("docsearch"))
        .unwrap_or_else(|| PathBuf::from("/tmp/docsearch-config"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bench.samples_per_length, 6);
        assert_eq!(config.client.contract, EndpointContract::Split);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = AppConfig::default();
        config.client.base_url = "http://search.internal:9000/api".into();
        config.client.contract = EndpointContract::Unified;
        config.logging.filter = "debug".into();
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [client]
            contract = "unified"
            "#,
        )
        .unwrap();
        assert_eq!(config.client.contract, EndpointContract::Unified);
        assert_eq!(config.client.base_url, docsearch_client::config::DEFAULT_BASE_URL);
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[client\nbase_url = ").unwrap();
        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn missing_explicit_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn overrides_replace_client_settings() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(Some("http://other:1/api".into()), Some("unified".into()))
            .unwrap();
        assert_eq!(config.client.base_url, "http://other:1/api");
        assert_eq!(config.client.contract, EndpointContract::Unified);
    }

    #[test]
    fn blank_base_url_override_is_ignored() {
        let mut config = AppConfig::default();
        config.apply_overrides(Some("  ".into()), None).unwrap();
        assert_eq!(config.client.base_url, docsearch_client::config::DEFAULT_BASE_URL);
    }

    #[test]
    fn unknown_contract_override_rejected() {
        let mut config = AppConfig::default();
        let err = config.apply_overrides(None, Some("both".into())).unwrap_err();
        assert!(err.to_string().contains("unknown endpoint contract"));
    }

    #[test]
    fn zero_bench_samples_rejected() {
        let mut config = AppConfig::default();
        config.bench.samples_per_length = 0;
        assert!(config.validate().unwrap_err().to_string().contains("samples_per_length"));
    }
}
