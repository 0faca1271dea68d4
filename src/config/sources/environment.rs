//! Environment source: LINKPOST__SECTION__KEY variables plus the LINKPOST_BACKEND_URL
//! shorthand, which wins over everything else in the environment.

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, Environment};

pub const BACKEND_URL_ENV: &str = "LINKPOST_BACKEND_URL";

pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder.add_source(
        Environment::with_prefix("LINKPOST")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true),
    );

    if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
        if !url.trim().is_empty() {
            builder = builder.set_override("backend.base_url", url)?;
        }
    }
    Ok(builder)
}
