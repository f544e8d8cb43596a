//! Export pipeline.
//!
//! records → start index → scoped records → keep/drop → goal → files on disk.

use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::files::filename::{self, slugify_goal, HTML_EXTENSION};
use crate::files::jsonl;
use crate::files::locator::expand_tilde;
use crate::filter::{RowFilter, SelectorReport};
use crate::record::Record;
use crate::transcript::{goal_text, resolve_start};
use crate::viewer;

/// The scoped, filtered view of one conversation.
#[derive(Debug, Clone)]
pub struct Transcript<'a> {
    /// Index of the first exported record in the source sequence.
    pub start: usize,
    /// Records kept by the filter, in source order.
    pub kept: Vec<&'a Record>,
    pub goal: String,
}

/// Scopes and filters `records`.
pub fn select<'a>(
    records: &'a [Record],
    anchor: Option<&str>,
    filter: &RowFilter,
) -> Result<Transcript<'a>, ExportError> {
    let start = resolve_start(records, anchor)?;
    let scoped = records.get(start..).unwrap_or_default();
    let kept = filter.apply(scoped);
    let goal = goal_text(records, start);

    tracing::info!(start, scoped = scoped.len(), kept = kept.len(), goal = %goal, "selected transcript");
    Ok(Transcript { start, kept, goal })
}

/// Selector report of the scoped records, for `--list-types`.
pub fn list_types(records: &[Record], anchor: Option<&str>) -> Result<(usize, SelectorReport), ExportError> {
    let start = resolve_start(records, anchor)?;
    let scoped = records.get(start..).unwrap_or_default();
    Ok((start, SelectorReport::collect(scoped)))
}

/// Options for one export run.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub anchor: Option<String>,
    pub filter: RowFilter,
    /// Explicit output path; defaults to `<export_dir>/<prefix>_<slug>.jsonl`.
    pub output: Option<PathBuf>,
    pub export_dir: PathBuf,
    pub slug: filename::Config,
    pub with_html: bool,
    pub write_index: bool,
}

/// What an export run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub source: PathBuf,
    pub output: PathBuf,
    pub total_rows: usize,
    pub kept_rows: usize,
    pub start_index: usize,
    pub goal: String,
    pub goal_slug: String,
    pub bytes_written: u64,
    pub html: Option<PathBuf>,
    pub index: Option<PathBuf>,
}

/// Filters `records` loaded from `source` and writes the export files.
pub fn export(
    source: &Path,
    records: &[Record],
    options: &ExportOptions,
) -> Result<ExportSummary, ExportError> {
    let transcript = select(records, options.anchor.as_deref(), &options.filter)?;
    let goal_slug = slugify_goal(&transcript.goal, &options.slug);

    let output = match &options.output {
        Some(path) => expand_tilde(path),
        None => filename::default_output_path(&options.export_dir, records, transcript.start, &options.slug),
    };

    let bytes_written = jsonl::write_records(&output, transcript.kept.iter().copied())?;
    tracing::info!(path = %output.display(), rows = transcript.kept.len(), "wrote transcript");

    let html = if options.with_html {
        let html_path = output.with_extension(HTML_EXTENSION);
        let jsonl_name = output
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        viewer::write_viewer(&html_path, &jsonl_name, &viewer::viewer_title(&transcript.goal))?;
        Some(html_path)
    } else {
        None
    };

    let index = if options.write_index {
        let dir = viewer::index_dir_for_output(&output, &options.export_dir);
        Some(viewer::write_index(&dir)?)
    } else {
        None
    };

    Ok(ExportSummary {
        source: source.to_path_buf(),
        output,
        total_rows: records.len(),
        kept_rows: transcript.kept.len(),
        start_index: transcript.start,
        goal: transcript.goal,
        goal_slug,
        bytes_written,
        html,
        index,
    })
}
