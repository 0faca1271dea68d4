//! CLI command-name contract for logging.

use crate::cli::parse::{Commands, ConfigCommands, GenerateCommands};

/// Command name string for log records (e.g. "generate.content", "schedule").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Generate { command } => format!("generate.{}", generate_command_name(command)),
        Commands::Preview { .. } => "preview".to_string(),
        Commands::Post { .. } => "post".to_string(),
        Commands::Schedule { .. } => "schedule".to_string(),
        Commands::Compose { .. } => "compose".to_string(),
        Commands::Demo => "demo".to_string(),
        Commands::Config { command } => format!("config.{}", config_command_name(command)),
    }
}

pub fn generate_command_name(command: &GenerateCommands) -> &'static str {
    match command {
        GenerateCommands::Content { .. } => "content",
        GenerateCommands::Image { .. } => "image",
    }
}

pub fn config_command_name(command: &ConfigCommands) -> &'static str {
    match command {
        ConfigCommands::Show { .. } => "show",
    }
}
