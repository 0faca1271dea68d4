//! End-to-end tests for the linkpost binary against an unreachable backend.

use std::process::{Command, Output};
use tempfile::TempDir;

const UNREACHABLE: &str = "http://127.0.0.1:1";

fn linkpost(work: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_linkpost"))
        .current_dir(work.path())
        .env("HOME", work.path())
        .env("XDG_CONFIG_HOME", work.path().join("config"))
        .env_remove("LINKPOST_BACKEND_URL")
        .env_remove("LINKPOST_ENV")
        .arg("--backend-url")
        .arg(UNREACHABLE)
        .arg("--quiet")
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_generate_content_falls_back_to_demo_text() {
    let work = TempDir::new().unwrap();
    let output = linkpost(&work, &["generate", "content", "Tell me about AI trends"]);

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let text = stdout(&output);
    assert!(text.contains("Backend not available, showing demo data."));
    assert!(text.contains("The AI Revolution is Here!"));
}

#[test]
fn test_generate_image_json_reports_fallback_url() {
    let work = TempDir::new().unwrap();
    let output = linkpost(
        &work,
        &["generate", "image", "technology stack", "--format", "json"],
    );

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["source_mode"], "fallback");
    assert!(value["result"]["image"]
        .as_str()
        .unwrap()
        .starts_with("https://images.unsplash.com/"));
    // nothing is written for a fallback URL
    assert!(!work.path().join("generated_image.png").exists());
}

#[test]
fn test_blank_prompt_is_rejected() {
    let work = TempDir::new().unwrap();
    let output = linkpost(&work, &["generate", "content", "  "]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Please enter a prompt for content generation"));
}

#[test]
fn test_schedule_with_zero_days_fails_before_posting() {
    let work = TempDir::new().unwrap();
    let output = linkpost(
        &work,
        &[
            "schedule",
            "--content",
            "Hello",
            "--image",
            "https://example.com/a.png",
            "--days",
            "0",
        ],
    );

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Day count must be at least 1 (got 0)"));
    assert!(!stdout(&output).contains("Posting for day"));
}

#[test]
fn test_post_against_unreachable_backend_is_simulated() {
    let work = TempDir::new().unwrap();
    let output = linkpost(
        &work,
        &[
            "post",
            "--content",
            "Hello network",
            "--image",
            "https://example.com/a.png",
            "--format",
            "json",
        ],
    );

    assert!(output.status.success(), "stderr={}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["outcome"], "demo");
    assert!(value["post_id"].as_str().unwrap().starts_with("demo-post-"));
}

#[test]
fn test_preview_requires_both_parts() {
    let work = TempDir::new().unwrap();
    let output = linkpost(&work, &["preview", "--content", "Only text"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Generate both content and image to see the preview"));
}

#[test]
fn test_demo_and_config_show() {
    let work = TempDir::new().unwrap();
    let output = linkpost(&work, &["demo"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Demo Mode"));

    let output = linkpost(&work, &["config", "show", "--format", "json"]);
    assert!(output.status.success(), "stderr={}", stderr(&output));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["backend"]["base_url"], UNREACHABLE);
}
