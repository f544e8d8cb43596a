//! End-to-end tests for the `cle` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{read_jsonl, run_cle, temp_fixture};

const DEFAULT_EXPORT: &str = "codex_sessions/20260215142000_f-42-add-dark-theme-toggle.jsonl";

#[test]
fn export_uses_default_name_and_prints_summary() {
    let (temp, source) = temp_fixture("rollout.jsonl");
    let source_arg = source.to_string_lossy().to_string();

    let (stdout, stderr, code) = run_cle(temp.path(), &["--source", &source_arg]);

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("rows: 16 -> 5"), "stdout: {}", stdout);
    assert!(stdout.contains("start_index: 3"));
    assert!(stdout.contains("goal: f-42 add dark theme toggle"));
    assert!(stdout.contains("goal_slug: f-42-add-dark-theme-toggle"));
    assert!(stdout.contains("size: "));

    let output = temp.path().join(DEFAULT_EXPORT);
    assert!(output.is_file(), "missing {}", output.display());
    assert!(temp.path().join("codex_sessions/index.html").is_file());
    assert!(!output.with_extension("html").exists());
}

#[test]
fn exported_rows_are_verbatim_source_records() {
    let (temp, source) = temp_fixture("rollout.jsonl");
    let source_arg = source.to_string_lossy().to_string();

    let (_, stderr, code) = run_cle(temp.path(), &["--source", &source_arg]);
    assert_eq!(code, 0, "stderr: {}", stderr);

    let rows = read_jsonl(&temp.path().join(DEFAULT_EXPORT));
    let kinds: Vec<&str> = rows
        .iter()
        .map(|row| row["payload"]["type"].as_str().unwrap_or_default())
        .collect();
    assert_eq!(kinds, vec!["message", "function_call", "message", "message", "message"]);
    assert_eq!(
        rows[0]["payload"]["content"][0]["text"],
        "Add a dark théme toggle to the viewer\nKeep it accessible."
    );

    // Output lines are compact and keep non-ASCII text unescaped
    let written = fs::read_to_string(temp.path().join(DEFAULT_EXPORT)).unwrap();
    assert!(written.contains("théme"));
    assert!(!written.contains("\": "));
}

#[test]
fn anchor_text_selects_later_task() {
    let (temp, source) = temp_fixture("rollout.jsonl");
    let source_arg = source.to_string_lossy().to_string();

    let (stdout, stderr, code) = run_cle(
        temp.path(),
        &["--source", &source_arg, "--anchor-text", "readme SECTION"],
    );

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("start_index: 12"));
    assert!(stdout.contains("rows: 16 -> 2"));
    assert!(stdout.contains("goal: Now write the README section"));
    assert!(temp
        .path()
        .join("codex_sessions/20260215142500_now-write-the-readme-section.jsonl")
        .is_file());
}

#[test]
fn include_and_exclude_override_defaults() {
    let (temp, source) = temp_fixture("rollout.jsonl");
    let source_arg = source.to_string_lossy().to_string();
    let output = temp.path().join("custom/out.jsonl");
    let output_arg = output.to_string_lossy().to_string();

    let (stdout, stderr, code) = run_cle(
        temp.path(),
        &[
            "--source",
            &source_arg,
            "--output",
            &output_arg,
            "--include",
            "Response:Reasoning",
            "--include",
            "row:compacted,row:event_msg",
            "--exclude",
            "event:token_count",
            "--exclude",
            "role:assistant",
        ],
    );

    assert_eq!(code, 0, "stderr: {}", stderr);
    // task_started, user, reasoning, function_call, task_complete, task_started, user, compacted
    assert!(stdout.contains("rows: 16 -> 8"), "stdout: {}", stdout);
    assert_eq!(read_jsonl(&output).len(), 8);
}

#[test]
fn agents_directive_stays_hidden_when_included() {
    let (temp, source) = temp_fixture("rollout.jsonl");
    let source_arg = source.to_string_lossy().to_string();
    let output = temp.path().join("out.jsonl");
    let output_arg = output.to_string_lossy().to_string();

    let (stdout, stderr, code) = run_cle(
        temp.path(),
        &[
            "--source",
            &source_arg,
            "--output",
            &output_arg,
            "--anchor-text",
            "AGENTS.md",
            "--include",
            "role:user",
        ],
    );

    assert_eq!(code, 0, "stderr: {}", stderr);
    // The anchor may land on the directive row, but the row itself is never exported
    assert!(stdout.contains("start_index: 2"), "stdout: {}", stdout);
    assert!(stdout.contains("rows: 16 -> 5"));
    let written = fs::read_to_string(&output).unwrap();
    assert!(!written.contains("AGENTS.md instructions"));
}

#[test]
fn with_html_writes_viewer_and_index_links() {
    let (temp, source) = temp_fixture("rollout.jsonl");
    let source_arg = source.to_string_lossy().to_string();

    let (stdout, stderr, code) = run_cle(temp.path(), &["--source", &source_arg, "--with-html"]);
    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("html: "));

    let html_path = temp.path().join(DEFAULT_EXPORT).with_extension("html");
    let html = fs::read_to_string(&html_path).unwrap();
    assert!(html.contains("Codex Conversation Log - f-42 add dark theme toggle"));
    assert!(html.contains("20260215142000_f-42-add-dark-theme-toggle.jsonl"));

    let index = fs::read_to_string(temp.path().join("codex_sessions/index.html")).unwrap();
    assert!(index.contains("./20260215142000_f-42-add-dark-theme-toggle.html\">Open HTML</a>"));
    assert!(index.contains("./20260215142000_f-42-add-dark-theme-toggle.jsonl\">Open JSONL</a>"));
    assert!(index.contains("2026-02-15 14:20:00"));
}

#[test]
fn missing_source_exits_with_one() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.jsonl");
    let missing_arg = missing.to_string_lossy().to_string();

    let (stdout, stderr, code) = run_cle(temp.path(), &["--source", &missing_arg]);

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Source file not found"), "stderr: {}", stderr);
    assert!(!temp.path().join("codex_sessions").exists());
}

#[test]
fn bad_selector_exits_with_two_before_reading_source() {
    let temp = TempDir::new().unwrap();

    Command::new(env!("CARGO_BIN_EXE_cle"))
        .current_dir(temp.path())
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .args(["--source", "does-not-exist.jsonl", "--include", "kind:foo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid selector prefix 'kind'"))
        .stderr(predicate::str::contains("row, event, response, role"));
}

#[test]
fn selector_without_value_is_rejected() {
    let temp = TempDir::new().unwrap();

    Command::new(env!("CARGO_BIN_EXE_cle"))
        .current_dir(temp.path())
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .args(["--exclude", "row:compacted,,role:"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid selector 'role:'. Missing value after ':'."));
}

#[test]
fn invalid_json_reports_line_number() {
    let temp = TempDir::new().unwrap();
    let source = temp.path().join("broken.jsonl");
    fs::write(
        &source,
        "{\"type\":\"session_meta\",\"payload\":{}}\n{\"type\": oops}\n",
    )
    .unwrap();

    Command::new(env!("CARGO_BIN_EXE_cle"))
        .current_dir(temp.path())
        .arg("--config")
        .arg(temp.path().join("config.toml"))
        .arg("--source")
        .arg(&source)
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid JSON on line 2"));

    assert!(!temp.path().join("codex_sessions").exists());
}

#[test]
fn config_file_supplies_selectors_and_output_dir() {
    let (temp, source) = temp_fixture("rollout.jsonl");
    fs::write(
        temp.path().join("cle-test-config.toml"),
        "[export]\noutput_dir = \"exports\"\nwrite_index = false\nexclude = [\"role:assistant\"]\n",
    )
    .unwrap();
    let source_arg = source.to_string_lossy().to_string();

    let (stdout, stderr, code) = run_cle(temp.path(), &["--source", &source_arg]);

    assert_eq!(code, 0, "stderr: {}", stderr);
    assert!(stdout.contains("rows: 16 -> 3"), "stdout: {}", stdout);
    assert!(!stdout.contains("index: "));
    assert!(temp
        .path()
        .join("exports/20260215142000_f-42-add-dark-theme-toggle.jsonl")
        .is_file());
}

#[test]
fn show_config_prints_effective_toml() {
    let temp = TempDir::new().unwrap();

    let (stdout, _, code) = run_cle(temp.path(), &["--show-config"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("[export]"));
    assert!(stdout.contains("output_dir = \"codex_sessions\""));
    assert!(stdout.contains("file_prefix = \"rollout-\""));
}

#[test]
fn unknown_anchor_exits_with_one_and_writes_nothing() {
    let (temp, source) = temp_fixture("rollout.jsonl");
    let source_arg = source.to_string_lossy().to_string();

    let (stdout, stderr, code) = run_cle(
        temp.path(),
        &["--source", &source_arg, "--anchor-text", "never said this"],
    );

    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Anchor text was not found in any user message."));
    assert!(!temp.path().join("codex_sessions").exists());
}
