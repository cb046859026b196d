//! API configuration

use std::path::PathBuf;

use serde::Deserialize;

/// Where documents are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// Process memory; everything is lost on restart
    Memory,
    /// One JSON file per document under `data_dir`
    File,
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Storage backend
    pub storage: StorageKind,
    /// Directory for file storage
    pub data_dir: PathBuf,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            storage: StorageKind::File,
            data_dir: PathBuf::from("./data"),
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `SURVEY_`-prefixed environment variables;
    /// unset values keep their defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("SURVEY"))
            .build()?
            .try_deserialize()
    }

    /// In-memory configuration for tests and throwaway runs
    pub fn in_memory() -> Self {
        Self {
            storage: StorageKind::Memory,
            ..Self::default()
        }
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
