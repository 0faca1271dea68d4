//! Integration tests for the linkpost client

mod cli_commands;
mod config_integration;
mod generation_fallback;
mod logging_default;
mod schedule_runs;
