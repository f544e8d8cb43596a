//! `index.html` listing every export in a sessions directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::NaiveDateTime;

use super::escape_html;
use crate::error::ExportError;
use crate::files::filename::{parse_session_stem, HTML_EXTENSION, JSONL_EXTENSION};

/// File name of the generated index.
pub const INDEX_FILE: &str = "index.html";

/// One exported transcript found in the sessions directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    pub stem: String,
    pub slug: String,
    pub prefix: Option<String>,
    pub jsonl_name: String,
    pub html_name: String,
    pub has_html: bool,
    pub modified: SystemTime,
}

impl SessionEntry {
    /// `YYYY-MM-DD hh:mm:ss` rendering of the prefix, when it is a valid timestamp.
    pub fn prefix_date(&self) -> Option<String> {
        let prefix = self.prefix.as_deref()?;
        NaiveDateTime::parse_from_str(prefix, "%Y%m%d%H%M%S")
            .ok()
            .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
    }
}

/// Where the index for an export at `output` belongs.
///
/// The output's own directory when it carries the export directory's name,
/// otherwise `export_dir`.
pub fn index_dir_for_output(output: &Path, export_dir: &Path) -> PathBuf {
    match (output.parent(), export_dir.file_name()) {
        (Some(parent), Some(name)) if parent.file_name() == Some(name) => parent.to_path_buf(),
        _ => export_dir.to_path_buf(),
    }
}

/// Collects `*.jsonl` exports, newest first.
///
/// Ordered by (has prefix, prefix, modification time, stem), all descending.
pub fn collect_entries(dir: &Path) -> Result<Vec<SessionEntry>, ExportError> {
    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(dir).map_err(|e| ExportError::io(dir, e))? {
        let path = dir_entry.map_err(|e| ExportError::io(dir, e))?.path();
        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(JSONL_EXTENSION) {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        let (prefix, slug) = parse_session_stem(stem);
        let html_path = path.with_extension(HTML_EXTENSION);
        let modified = fs::metadata(&path)
            .and_then(|m| m.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);

        entries.push(SessionEntry {
            stem: stem.to_string(),
            slug: slug.to_string(),
            prefix: prefix.map(String::from),
            jsonl_name: format!("{}.{}", stem, JSONL_EXTENSION),
            html_name: format!("{}.{}", stem, HTML_EXTENSION),
            has_html: html_path.is_file(),
            modified,
        });
    }

    entries.sort_by(|a, b| {
        let key = |e: &SessionEntry| (e.prefix.is_some(), e.prefix.clone(), e.modified, e.stem.clone());
        key(b).cmp(&key(a))
    });
    Ok(entries)
}

fn render_row(entry: &SessionEntry) -> String {
    let prefix_cell = match &entry.prefix {
        Some(prefix) => match entry.prefix_date() {
            Some(date) => format!(
                "<code>{}</code> <span class=\"muted\">{}</span>",
                escape_html(prefix),
                escape_html(&date)
            ),
            None => format!("<code>{}</code>", escape_html(prefix)),
        },
        None => "<span class=\"muted\">-</span>".to_string(),
    };

    let mut links = Vec::new();
    if entry.has_html {
        links.push(format!(
            "<a href=\"./{}\">Open HTML</a>",
            escape_html(&entry.html_name)
        ));
    }
    links.push(format!(
        "<a href=\"./{}\">Open JSONL</a>",
        escape_html(&entry.jsonl_name)
    ));

    format!(
        r#"
          <tr>
            <td>
              <div class="name">
                <span class="base">{slug}</span>
                <span class="muted">{stem}</span>
              </div>
            </td>
            <td>{prefix_cell}</td>
            <td>
              <div class="links">
                {links}
              </div>
            </td>
          </tr>"#,
        slug = escape_html(&entry.slug),
        stem = escape_html(&entry.stem),
        prefix_cell = prefix_cell,
        links = links.join(" "),
    )
}

/// Renders the index page.
pub fn render_index(entries: &[SessionEntry]) -> String {
    let rows = if entries.is_empty() {
        r#"
          <tr>
            <td colspan="3"><span class="muted">No session exports yet.</span></td>
          </tr>"#
            .to_string()
    } else {
        entries.iter().map(render_row).collect::<String>()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Codex Session Exports</title>
  <style>
{STYLE}
  </style>
</head>
<body>
  <main>
    <h1>Codex Session Exports</h1>
    <p>Index of exported conversation sessions in this folder. Newest entries are listed first.</p>

    <div class="table-wrap">
      <table>
        <thead>
          <tr>
            <th>Session</th>
            <th>Timestamp Prefix</th>
            <th>Open</th>
          </tr>
        </thead>
        <tbody>{rows}
        </tbody>
      </table>
    </div>
  </main>
</body>
</html>
"#
    )
}

/// Rebuilds `index.html` in `dir`, creating the directory if needed.
pub fn write_index(dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|e| ExportError::io(dir, e))?;
    let entries = collect_entries(dir)?;
    let path = dir.join(INDEX_FILE);
    fs::write(&path, render_index(&entries)).map_err(|e| ExportError::io(&path, e))?;
    tracing::debug!(path = %path.display(), entries = entries.len(), "wrote session index");
    Ok(path)
}

const STYLE: &str = r#"    :root {
      --bg: #f6f8fa;
      --text: #1f2328;
      --muted: #59636e;
      --surface: #ffffff;
      --border: #d0d7de;
      --link: #0969da;
    }

    * { box-sizing: border-box; }

    body {
      margin: 0;
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
      background: var(--bg);
      color: var(--text);
    }

    main {
      max-width: 980px;
      margin: 0 auto;
      padding: 32px 20px 56px;
    }

    h1 { margin: 0 0 8px; font-size: 2rem; }
    p { margin: 0 0 24px; color: var(--muted); }

    .table-wrap {
      overflow-x: auto;
      background: var(--surface);
      border: 1px solid var(--border);
      border-radius: 10px;
    }

    table { width: 100%; border-collapse: collapse; min-width: 760px; }

    th, td {
      text-align: left;
      vertical-align: top;
      padding: 12px 14px;
      border-bottom: 1px solid var(--border);
      font-size: 0.95rem;
    }

    th { position: sticky; top: 0; background: #f3f4f6; font-weight: 600; }
    tbody tr:last-child td { border-bottom: none; }

    .name { display: flex; flex-direction: column; gap: 4px; word-break: break-word; }
    .name .base { font-weight: 600; }
    .muted { color: var(--muted); font-size: 0.88rem; }
    .links { display: flex; gap: 12px; flex-wrap: wrap; }

    a { color: var(--link); text-decoration: none; }
    a:hover { text-decoration: underline; }"#;
