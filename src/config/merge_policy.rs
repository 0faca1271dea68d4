//! Merge rules: defaults applied before any file or environment source.

use super::{DEFAULT_BACKEND_URL, DEFAULT_GENERATED_IMAGE_PATH};
use crate::schedule::DEFAULT_INTERVAL;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("backend.base_url", DEFAULT_BACKEND_URL)?
        .set_default("backend.connect_timeout_secs", 10_i64)?
        .set_default("backend.request_timeout_secs", 120_i64)?
        .set_default("schedule.interval_secs", DEFAULT_INTERVAL.as_secs() as i64)?
        .set_default("schedule.image_path", DEFAULT_GENERATED_IMAGE_PATH)
}
