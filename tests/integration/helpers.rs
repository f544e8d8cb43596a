//! Shared helpers for integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Path to the test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copies a fixture into a fresh temp directory.
///
/// Returns the temp dir (keep it alive) and the copied file's path.
pub fn temp_fixture(name: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let path = temp.path().join(name);
    fs::copy(fixtures_dir().join(name), &path).expect("Failed to copy fixture");
    (temp, path)
}

/// Runs cle inside `cwd` with an isolated, non-existent config file.
pub fn run_cle(cwd: &Path, args: &[&str]) -> (String, String, i32) {
    let config = cwd.join("cle-test-config.toml");
    let output = Command::new(env!("CARGO_BIN_EXE_cle"))
        .arg("--config")
        .arg(&config)
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("Failed to execute cle");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// Reads a JSONL file back as JSON values.
pub fn read_jsonl(path: &Path) -> Vec<serde_json::Value> {
    fs::read_to_string(path)
        .expect("Failed to read output")
        .lines()
        .map(|line| serde_json::from_str(line).expect("Output line is not JSON"))
        .collect()
}
