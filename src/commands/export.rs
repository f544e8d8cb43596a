//! Export handler

use std::path::Path;

use anyhow::{Context, Result};
use humansize::{format_size, DECIMAL};

use cle::cli::Cli;
use cle::{Config, ExportOptions, Record, RowFilter};

/// Write the filtered transcript (plus viewer and index) and print a summary.
#[cfg(not(tarpaulin_include))]
pub fn handle_export(
    cli: &Cli,
    config: &Config,
    filter: RowFilter,
    source: &Path,
    records: &[Record],
) -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;

    let options = ExportOptions {
        anchor: cli.anchor_text.clone(),
        filter,
        output: cli.output.clone(),
        export_dir: config.export.export_dir(&cwd),
        slug: config.export.slug_config(),
        with_html: cli.with_html || config.export.with_html,
        write_index: config.export.write_index,
    };

    let summary = cle::export(source, records, &options)?;

    println!("source: {}", summary.source.display());
    println!("output: {}", summary.output.display());
    println!("rows: {} -> {}", summary.total_rows, summary.kept_rows);
    println!("start_index: {}", summary.start_index);
    println!("goal: {}", summary.goal);
    println!("goal_slug: {}", summary.goal_slug);
    println!("size: {}", format_size(summary.bytes_written, DECIMAL));
    if let Some(html) = &summary.html {
        println!("html: {}", html.display());
    }
    if let Some(index) = &summary.index {
        println!("index: {}", index.display());
    }

    Ok(())
}
