//! Library-level tests of the export pipeline on a real rollout fixture.

use std::path::Path;

use cle::files::filename;
use cle::files::jsonl::load_records;
use cle::filter::parse_selector_args;
use cle::{export, select, ExportError, ExportOptions, RowFilter};
use tempfile::TempDir;

use crate::helpers::{fixtures_dir, read_jsonl};

fn options(dir: &Path) -> ExportOptions {
    ExportOptions {
        anchor: None,
        filter: RowFilter::default(),
        output: None,
        export_dir: dir.join("codex_sessions"),
        slug: filename::Config::default(),
        with_html: false,
        write_index: true,
    }
}

#[test]
fn fixture_loads_every_non_blank_line() {
    let records = load_records(&fixtures_dir().join("rollout.jsonl")).unwrap();
    assert_eq!(records.len(), 16);
    assert_eq!(records[0].row_type(), Some("session_meta"));
    assert!(records[3].is_task_started());
}

#[test]
fn default_selection_keeps_conversation_rows() {
    let records = load_records(&fixtures_dir().join("rollout.jsonl")).unwrap();
    let transcript = select(&records, None, &RowFilter::default()).unwrap();

    assert_eq!(transcript.start, 3);
    assert_eq!(transcript.goal, "f-42 add dark theme toggle");
    let kept: Vec<usize> = transcript
        .kept
        .iter()
        .map(|kept| records.iter().position(|r| std::ptr::eq(r, *kept)).unwrap())
        .collect();
    assert_eq!(kept, vec![5, 7, 10, 13, 15]);
}

#[test]
fn excluding_user_role_still_derives_goal_from_assistant() {
    let records = load_records(&fixtures_dir().join("rollout.jsonl")).unwrap();
    let filter = RowFilter::new(
        parse_selector_args(Vec::<String>::new()).unwrap(),
        parse_selector_args(["role:user"]).unwrap(),
    );
    let transcript = select(&records, None, &filter).unwrap();

    assert_eq!(transcript.kept.len(), 3);
    assert_eq!(transcript.goal, "f-42 add dark theme toggle");
}

#[test]
fn export_writes_jsonl_index_and_summary() {
    let temp = TempDir::new().unwrap();
    let source = fixtures_dir().join("rollout.jsonl");
    let records = load_records(&source).unwrap();

    let summary = export(&source, &records, &options(temp.path())).unwrap();

    assert_eq!(
        summary.output,
        temp.path()
            .join("codex_sessions/20260215142000_f-42-add-dark-theme-toggle.jsonl")
    );
    assert_eq!(summary.total_rows, 16);
    assert_eq!(summary.kept_rows, 5);
    assert_eq!(summary.goal_slug, "f-42-add-dark-theme-toggle");
    assert_eq!(summary.source, source);

    let rows = read_jsonl(&summary.output);
    assert_eq!(rows.len(), 5);
    assert_eq!(&rows[2], records[10].raw());
}

#[test]
fn second_export_is_listed_in_index() {
    let temp = TempDir::new().unwrap();
    let source = fixtures_dir().join("rollout.jsonl");
    let records = load_records(&source).unwrap();

    export(&source, &records, &options(temp.path())).unwrap();
    let mut later = options(temp.path());
    later.anchor = Some("readme".to_string());
    let summary = export(&source, &records, &later).unwrap();

    let index = std::fs::read_to_string(summary.index.unwrap()).unwrap();
    let newer = index.find("20260215142500_now-write-the-readme-section").unwrap();
    let older = index.find("20260215142000_f-42-add-dark-theme-toggle").unwrap();
    assert!(newer < older);
}

#[test]
fn anchor_miss_is_reported_before_writing() {
    let temp = TempDir::new().unwrap();
    let source = fixtures_dir().join("rollout.jsonl");
    let records = load_records(&source).unwrap();
    let mut options = options(temp.path());
    options.anchor = Some("dark mode".to_string());

    let err = export(&source, &records, &options).unwrap_err();

    assert!(matches!(err, ExportError::AnchorNotFound { ref anchor } if anchor == "dark mode"));
    assert_eq!(err.exit_code(), 1);
    assert!(!temp.path().join("codex_sessions").exists());
}
