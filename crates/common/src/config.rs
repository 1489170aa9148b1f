use crate::error::YatraError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Yatra application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Destination dataset (CSV) path
    pub dataset_path: PathBuf,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Maximum results for place-similarity requests
    pub place_limit: usize,

    /// Maximum results for keyword requests
    pub keyword_limit: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path: PathBuf::from("./data/Top Indian Places to Visit.csv"),
            server_host: "127.0.0.1".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
            place_limit: 5,
            keyword_limit: 10,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, YatraError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();
        let config = Self {
            dataset_path: Self::get_env_path("DATASET_PATH").unwrap_or(defaults.dataset_path),
            server_host: std::env::var("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: Self::get_env_parsed("SERVER_PORT").unwrap_or(defaults.server_port),
            log_dir: Self::get_env_path("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            place_limit: Self::get_env_parsed("PLACE_LIMIT").unwrap_or(defaults.place_limit),
            keyword_limit: Self::get_env_parsed("KEYWORD_LIMIT")
                .unwrap_or(defaults.keyword_limit),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get PathBuf from environment variable
    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    fn get_env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
        std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), YatraError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                YatraError::config(format!(
                    "Failed to create directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Get log file path
    pub fn get_log_path(&self, filename: &str) -> PathBuf {
        self.log_dir.join(filename)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), YatraError> {
        if self.dataset_path.as_os_str().is_empty() {
            return Err(YatraError::config("Dataset path cannot be empty"));
        }

        if self.server_port == 0 {
            return Err(YatraError::config("Server port cannot be 0"));
        }

        if self.place_limit == 0 || self.keyword_limit == 0 {
            return Err(YatraError::config("Result limits must be at least 1"));
        }

        Ok(())
    }
}
