//! Shared presentation: demo-mode description and effective configuration.

use crate::config::LinkpostConfig;
use crate::error::ApiError;
use crate::fallback::DemoInfo;
use owo_colors::OwoColorize;

pub fn format_demo_info(info: &DemoInfo) -> String {
    let mut output = format!("{}\n{}\n\nDemo Features:\n", info.title.bold(), info.description);
    for feature in info.features {
        output.push_str(&format!("  • {}\n", feature));
    }
    output
}

pub fn format_config(config: &LinkpostConfig, format: &str) -> Result<String, ApiError> {
    match format {
        "json" => serde_json::to_string_pretty(config)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e))),
        "toml" => toml::to_string_pretty(config)
            .map_err(|e| ApiError::ConfigError(format!("Failed to render config: {}", e))),
        other => Err(ApiError::ConfigError(format!(
            "Unknown format '{}' (expected toml or json)",
            other
        ))),
    }
}
