//! Error types for the linkpost client.

use crate::generation::GenerationKind;
use thiserror::Error;

/// Input problems caught before any network call is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a prompt for {0} generation")]
    EmptyPrompt(GenerationKind),

    #[error("Day count must be at least 1 (got {0})")]
    NonPositiveDayCount(i64),

    #[error("Please generate both content and image first (content is missing)")]
    MissingContent,

    #[error("Please generate both content and image first (image is missing)")]
    MissingImage,
}

/// Client errors
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Backend request failed: {0}")]
    BackendRequestFailed(String),

    #[error("Backend returned status {status}: {body}")]
    BackendStatus { status: u16, body: String },

    #[error("Failed to decode backend response: {0}")]
    BackendDecode(String),

    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("A schedule is already running; wait for it to complete before starting another")]
    ScheduleAlreadyRunning,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl ApiError {
    /// True for failures of the outbound call itself (as opposed to local problems).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            ApiError::BackendRequestFailed(_)
                | ApiError::BackendStatus { .. }
                | ApiError::BackendDecode(_)
                | ApiError::BackendError(_)
        )
    }
}
