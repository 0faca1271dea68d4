//! Local config file source: linkpost.toml and linkpost.{env}.toml in a directory

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File, FileFormat};
use std::path::Path;

pub const ENV_NAME_VAR: &str = "LINKPOST_ENV";

/// Add local config files to builder.
/// Precedence: linkpost.toml (base) then linkpost.{LINKPOST_ENV}.toml.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    dir: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let mut builder = builder;

    let base_config_path = dir.join("linkpost.toml");
    if base_config_path.exists() {
        builder = builder.add_source(
            File::from(base_config_path)
                .format(FileFormat::Toml)
                .required(false),
        );
    }

    if let Ok(env_name) = std::env::var(ENV_NAME_VAR) {
        let env_config_path = dir.join(format!("linkpost.{}.toml", env_name));
        if env_config_path.exists() {
            builder = builder.add_source(
                File::from(env_config_path)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }
    }

    Ok(builder)
}
