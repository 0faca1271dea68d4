//! CLI domain: parse, route, help, output, and presentation only.
//! No orchestration logic; the route table dispatches to the library services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands, GenerateCommands, PostArgs};
pub use presentation::{
    format_config, format_demo_info, format_generation_json, format_generation_text,
    format_post_outcome_json, format_post_outcome_text, format_schedule_event,
    format_schedule_report_json, format_schedule_report_text,
};
pub use route::RunContext;
