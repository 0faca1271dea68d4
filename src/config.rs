//! Configuration System
//!
//! Layered configuration: built-in defaults, then the global config file, then local
//! `linkpost.toml` files, then environment variables. CLI flags are applied on top by
//! the binary.

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::schedule::{DEFAULT_INTERVAL, MAX_INTERVAL};
use serde::{Deserialize, Serialize};
use std::time::Duration;

mod facade;
mod merge_policy;
mod sources;

pub use facade::ConfigLoader;
pub use sources::environment::BACKEND_URL_ENV;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5005";
pub const DEFAULT_GENERATED_IMAGE_PATH: &str = "generated_image.png";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkpostConfig {
    /// Backend service settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Automated posting settings
    #[serde(default)]
    pub schedule: ScheduleSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the generation/posting service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_request_timeout_secs() -> u64 {
    120
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl BackendConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), String> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err("base_url cannot be empty".to_string());
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(format!(
                "base_url must start with http:// or https:// (got '{}')",
                url
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err("request_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSettings {
    /// Seconds between scheduled posts (default: one day)
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// File name the backend stores generated images under
    #[serde(default = "default_image_path")]
    pub image_path: String,
}

fn default_interval_secs() -> u64 {
    DEFAULT_INTERVAL.as_secs()
}

fn default_image_path() -> String {
    DEFAULT_GENERATED_IMAGE_PATH.to_string()
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            image_path: default_image_path(),
        }
    }
}

impl ScheduleSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.image_path.trim().is_empty() {
            return Err("image_path cannot be empty".to_string());
        }
        if self.interval_secs > MAX_INTERVAL.as_secs() {
            return Err(format!(
                "interval_secs must be at most {} (got {})",
                MAX_INTERVAL.as_secs(),
                self.interval_secs
            ));
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Backend(String),
    Schedule(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Backend(msg) => write!(f, "backend: {}", msg),
            ValidationError::Schedule(msg) => write!(f, "schedule: {}", msg),
            ValidationError::Logging(msg) => write!(f, "logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl LinkpostConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.backend.validate() {
            errors.push(ValidationError::Backend(e));
        }
        if let Err(e) = self.schedule.validate() {
            errors.push(ValidationError::Schedule(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate and fold all problems into a single error.
    pub fn ensure_valid(&self) -> Result<(), ApiError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            ApiError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }
}
