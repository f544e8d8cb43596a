//! Command handlers for the `cle` binary.

mod config;
mod export;
mod types;

use anyhow::Result;

use cle::cli::Cli;
use cle::files::jsonl;
use cle::files::{ExplicitSource, SourceLocator};
use cle::filter::parse_selector_args;
use cle::{Config, ExportError, RowFilter};

/// Runs the command selected by `cli`.
pub fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if cli.show_config {
        return config::handle_show(&config);
    }

    // Selectors are validated before the source is touched
    let include = parse_selector_args(config.export.include.iter().chain(&cli.include))
        .map_err(ExportError::from)?;
    let exclude = parse_selector_args(config.export.exclude.iter().chain(&cli.exclude))
        .map_err(ExportError::from)?;
    let filter = RowFilter::new(include, exclude);

    let locator: Box<dyn SourceLocator> = match &cli.source {
        Some(path) => Box::new(ExplicitSource::new(path)),
        None => Box::new(config.source.newest_rollout()?),
    };
    let source = locator.locate()?;
    tracing::debug!(locator = locator.name(), source = %source.display(), "resolved source");

    let records = jsonl::load_records(&source)?;

    if cli.list_types {
        return types::handle_list(&source, &records, cli.anchor_text.as_deref());
    }

    export::handle_export(cli, &config, filter, &source, &records)
}
