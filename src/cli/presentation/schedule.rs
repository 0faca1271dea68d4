//! Schedule presentation: live status lines and the final report.

use crate::error::ApiError;
use crate::schedule::{PublishOutcome, ScheduleEvent, ScheduleReport};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// One status line per event.
pub fn format_schedule_event(event: &ScheduleEvent) -> String {
    let line = event.to_string();
    match event {
        ScheduleEvent::Posting { .. } => format!("{}", line.bold()),
        ScheduleEvent::Attempt(attempt) => match attempt.outcome {
            PublishOutcome::Success => format!("  {}", line.green()),
            PublishOutcome::Failure => format!("  {}", line.red()),
        },
        ScheduleEvent::Waiting { .. } => format!("  {}", line.dimmed()),
        ScheduleEvent::Completed { .. } => format!("{}", line.green().bold()),
    }
}

pub fn format_schedule_report_text(report: &ScheduleReport) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Day", "Outcome", "Posted at", "Message"]);
    for attempt in &report.attempts {
        let outcome = match attempt.outcome {
            PublishOutcome::Success => "success",
            PublishOutcome::Failure => "failure",
        };
        table.add_row(vec![
            (attempt.day_index + 1).to_string(),
            outcome.to_string(),
            attempt.attempted_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            attempt.message.clone(),
        ]);
    }
    format!(
        "{}\n{} of {} post(s) succeeded, {} failed.",
        table,
        report.succeeded(),
        report.day_count,
        report.failed()
    )
}

pub fn format_schedule_report_json(report: &ScheduleReport) -> Result<String, ApiError> {
    serde_json::to_string_pretty(report).map_err(|e| ApiError::BackendDecode(e.to_string()))
}
