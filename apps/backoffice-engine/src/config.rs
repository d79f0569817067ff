//! Configuration module for the back-office engine.
//!
//! Loads and validates the YAML configuration covering persistence
//! (data directory and collection file names) and observability.
//!
//! # Usage
//!
//! ```rust,ignore
//! use backoffice_engine::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Persistence configuration.
    #[serde(default)]
    pub persistence: PersistenceConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Persistence configuration: where the collection files live.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistenceConfig {
    /// Directory holding the collection files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Product collection file name.
    #[serde(default = "default_products_file")]
    pub products_file: String,
    /// Order header collection file name.
    #[serde(default = "default_orders_file")]
    pub orders_file: String,
    /// Order items collection file name.
    #[serde(default = "default_order_items_file")]
    pub order_items_file: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            products_file: default_products_file(),
            orders_file: default_orders_file(),
            order_items_file: default_order_items_file(),
        }
    }
}

impl PersistenceConfig {
    /// Full path of the product collection file.
    #[must_use]
    pub fn products_path(&self) -> PathBuf {
        self.data_dir.join(&self.products_file)
    }

    /// Full path of the order header collection file.
    #[must_use]
    pub fn orders_path(&self) -> PathBuf {
        self.data_dir.join(&self.orders_file)
    }

    /// Full path of the order items collection file.
    #[must_use]
    pub fn order_items_path(&self) -> PathBuf {
        self.data_dir.join(&self.order_items_file)
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}
fn default_products_file() -> String {
    "products.txt".to_string()
}
fn default_orders_file() -> String {
    "orders.txt".to_string()
}
fn default_order_items_file() -> String {
    "order_items.txt".to_string()
}

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level filter (`error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns error if a file name is empty or names a path instead
    /// of a bare file, or the log level is unknown.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (label, name) in [
            ("products_file", &self.persistence.products_file),
            ("orders_file", &self.persistence.orders_file),
            ("order_items_file", &self.persistence.order_items_file),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "persistence.{label} must not be empty"
                )));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(ConfigError::ValidationError(format!(
                    "persistence.{label} must be a bare file name, got '{name}'"
                )));
            }
        }

        match self.observability.log_level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(ConfigError::ValidationError(format!(
                "observability.log_level '{other}' is not a valid level"
            ))),
        }
    }
}

/// Load and validate configuration from a YAML file.
///
/// Defaults to `config.yaml` in the working directory; a missing file
/// yields the default configuration.
///
/// # Errors
///
/// Returns error if the file cannot be read (other than not existing),
/// fails to parse, or fails validation.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let config = match std::fs::read_to_string(path) {
        Ok(contents) => serde_yaml_bw::from_str(&contents)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
        Err(source) => {
            return Err(ConfigError::ReadError {
                path: path.to_string(),
                source,
            })
        }
    };

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.persistence.products_path(), PathBuf::from("data/products.txt"));
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn parses_yaml() {
        let yaml = r"
persistence:
  data_dir: /var/lib/backoffice
  products_file: catalog.txt
observability:
  log_level: debug
";
        let config: Config = serde_yaml_bw::from_str(yaml).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.persistence.products_path(),
            PathBuf::from("/var/lib/backoffice/catalog.txt")
        );
        // Unspecified fields keep their defaults.
        assert_eq!(config.persistence.orders_file, "orders.txt");
        assert_eq!(config.observability.log_level, "debug");
    }

    #[test]
    fn rejects_empty_file_name() {
        let mut config = Config::default();
        config.persistence.orders_file = String::new();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_path_as_file_name() {
        let mut config = Config::default();
        config.persistence.products_file = "../products.txt".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_unknown_log_level() {
        let mut config = Config::default();
        config.observability.log_level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config(Some("/nonexistent/config.yaml")).unwrap();
        assert_eq!(config.persistence.products_file, "products.txt");
    }

    #[test]
    fn load_config_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "observability:\n  log_level: warn\n").unwrap();

        let config = load_config(path.to_str()).unwrap();
        assert_eq!(config.observability.log_level, "warn");
    }
}
