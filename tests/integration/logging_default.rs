//! Integration tests for log destinations.
//!
//! Logs go to stderr by default so stdout only carries command output; `--log-output
//! file` writes to the default file under the platform state directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

struct Sandbox {
    _temp: TempDir,
    root: PathBuf,
}

impl Sandbox {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let root = temp.path().to_path_buf();
        for dir in ["state", "data", "config", "home", "work"] {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
        Self { _temp: temp, root }
    }

    fn state_home(&self) -> PathBuf {
        self.root.join("state")
    }

    fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_linkpost"))
            .current_dir(self.root.join("work"))
            .env("XDG_STATE_HOME", self.state_home())
            .env("XDG_DATA_HOME", self.root.join("data"))
            .env("XDG_CONFIG_HOME", self.root.join("config"))
            .env("HOME", self.root.join("home"))
            .env_remove("LINKPOST_LOG")
            .env_remove("LINKPOST_LOG_OUTPUT")
            .env_remove("LINKPOST_BACKEND_URL")
            .args(args)
            .output()
            .unwrap()
    }
}

/// Matches default_log_file_path in src/logging.rs.
fn expected_log_path(state_home: &Path) -> PathBuf {
    state_home.join("linkpost").join("linkpost.log")
}

#[test]
fn test_default_logging_goes_to_stderr() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["demo"]);

    assert!(
        output.status.success(),
        "linkpost demo should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Demo Features:"));
    assert!(!stdout.contains("linkpost starting"));
    assert!(stderr.contains("linkpost starting"));
    assert!(!expected_log_path(&sandbox.state_home()).exists());
}

#[test]
fn test_file_output_writes_default_log_file() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--log-output", "file", "demo"]);

    assert!(output.status.success());
    let log_path = expected_log_path(&sandbox.state_home());
    let log = fs::read_to_string(&log_path)
        .unwrap_or_else(|e| panic!("log file {:?} should exist: {}", log_path, e));
    assert!(log.contains("linkpost starting"));
}

#[test]
fn test_quiet_disables_logging() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&["--quiet", "demo"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).trim().is_empty());
}
