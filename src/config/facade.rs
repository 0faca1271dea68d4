//! ConfigLoader: single entry point that assembles sources in precedence order.

use super::merge_policy::builder_with_defaults;
use super::sources::{environment, global_file, local_file};
use super::LinkpostConfig;
use crate::error::ApiError;
use config::{File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a working directory.
    /// Precedence: defaults < global file < local files < environment.
    pub fn load(dir: &Path) -> Result<LinkpostConfig, ApiError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = local_file::add_to_builder(builder, dir)?;
        let builder = environment::add_to_builder(builder)?;

        let config: LinkpostConfig = builder.build()?.try_deserialize()?;
        debug!(base_url = %config.backend.base_url, "Configuration loaded");
        Ok(config)
    }

    /// Load configuration from an explicit file. The file must exist; global and local
    /// files are skipped, the environment still applies.
    pub fn load_from_file(path: &Path) -> Result<LinkpostConfig, ApiError> {
        if !path.exists() {
            return Err(ApiError::ConfigError(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let builder = builder_with_defaults()?
            .add_source(File::from(path).format(FileFormat::Toml).required(true));
        let builder = environment::add_to_builder(builder)?;

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Location of the global config file, when one can be determined.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }
}
