//! CLI presentation: text and json formatters per command family.

mod generation;
mod post;
mod schedule;
mod shared;

pub use generation::{format_generation_json, format_generation_text};
pub use post::{format_post_outcome_json, format_post_outcome_text};
pub use schedule::{
    format_schedule_event, format_schedule_report_json, format_schedule_report_text,
};
pub use shared::{format_config, format_demo_info};
