//! One-time post presentation.

use crate::error::ApiError;
use crate::post::PostOutcome;
use owo_colors::OwoColorize;

pub fn format_post_outcome_text(outcome: &PostOutcome) -> String {
    let message = outcome.message();
    match outcome {
        PostOutcome::Published { status } if !status.is_empty() => {
            format!("{}\nStatus: {}", message.green(), status)
        }
        PostOutcome::Published { .. } => message.green().to_string(),
        PostOutcome::Rejected { .. } => message.red().to_string(),
        PostOutcome::Demo(demo) => format!("{}\nDemo post id: {}", message.blue(), demo.post_id),
    }
}

pub fn format_post_outcome_json(outcome: &PostOutcome) -> Result<String, ApiError> {
    serde_json::to_string_pretty(outcome).map_err(|e| ApiError::BackendDecode(e.to_string()))
}
