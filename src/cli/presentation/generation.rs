//! Generation presentation: generated content/image text and json.

use crate::error::ApiError;
use crate::generation::{GenerationResult, Payload};
use owo_colors::OwoColorize;
use serde_json::json;

const DEMO_NOTICE: &str = "Backend not available, showing demo data.";

pub fn format_generation_text(result: &GenerationResult) -> String {
    let mut output = String::new();
    if result.is_fallback() {
        output.push_str(&format!("{}\n\n", DEMO_NOTICE.yellow()));
    }
    match result.payload() {
        Payload::Content(text) => {
            output.push_str(&format!("{}\n\n", "Content Generated Successfully!".green().bold()));
            output.push_str(text);
        }
        Payload::Image(image) => {
            output.push_str(&format!("{}\n\n", "Image Generated Successfully!".green().bold()));
            output.push_str(&format!("Image: {}", image.describe()));
        }
    }
    output
}

pub fn format_generation_json(result: &GenerationResult) -> Result<String, ApiError> {
    let body = match result.payload() {
        Payload::Content(text) => json!({ "kind": "content", "content": text }),
        Payload::Image(image) => json!({ "kind": "image", "image": image.describe() }),
    };
    let out = json!({
        "success": result.success(),
        "source_mode": result.source_mode(),
        "result": body,
    });
    serde_json::to_string_pretty(&out).map_err(|e| ApiError::BackendDecode(e.to_string()))
}
