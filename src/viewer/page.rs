//! Static viewer page for one exported transcript.
//!
//! The page is only a shell: the hosted viewer script fetches the JSONL named
//! in the `codex-log-source` meta tag and renders it in the browser.

use std::fs;
use std::path::Path;

use super::escape_html;
use crate::error::ExportError;

const VIEWER_STYLESHEET: &str = "https://jerometremblay.github.io/codex_log_viewer/codex_log_viewer.css";
const VIEWER_SCRIPT: &str = "https://jerometremblay.github.io/codex_log_viewer/codex_log_viewer.js";
const MARKDOWN_SCRIPT: &str = "https://cdn.jsdelivr.net/npm/markdown-it@14/dist/markdown-it.min.js";

/// Title prefix for viewer pages.
pub const TITLE_PREFIX: &str = "Codex Conversation Log - ";

/// Viewer title for a conversation goal.
pub fn viewer_title(goal: &str) -> String {
    format!("{}{}", TITLE_PREFIX, goal)
}

/// Renders the viewer page for `jsonl_name`.
pub fn render_viewer(jsonl_name: &str, title: &str) -> String {
    let jsonl_name = escape_html(jsonl_name);
    let title = escape_html(title);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <meta name="codex-log-source" content="{jsonl_name}" />
  <title>{title}</title>
  <link rel="stylesheet" href="{VIEWER_STYLESHEET}" />
  <script defer src="{MARKDOWN_SCRIPT}"></script>
  <script defer src="{VIEWER_SCRIPT}"></script>
</head>
<body>
  <div class="container">
    <div id="app">
      <div class="session">
        <div class="title">{title}</div>
        <div class="subtitle">Loading JSONL log...</div>
      </div>
    </div>
  </div>
</body>
</html>
"#
    )
}

/// Writes the viewer page to `path`.
pub fn write_viewer(path: &Path, jsonl_name: &str, title: &str) -> Result<(), ExportError> {
    fs::write(path, render_viewer(jsonl_name, title)).map_err(|e| ExportError::io(path, e))
}
