//! Command-line interface definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::Parser;

/// Export a conversation-only Codex JSONL from a rollout log.
#[derive(Debug, Parser)]
#[command(name = "cle", version, long_about = None)]
pub struct Cli {
    /// Path to source rollout JSONL. Defaults to newest ~/.codex/sessions/**/rollout-*.jsonl
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Output JSONL path. Defaults to <cwd>/codex_sessions/<timestamp>_<goal-slug>.jsonl
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Start from nearest prior task_started before first user message containing this text
    #[arg(long, value_name = "TEXT")]
    pub anchor_text: Option<String>,

    /// Re-include filtered rows matching selectors. Repeatable and comma-separated.
    /// Selector format: row:<type>, event:<type>, response:<type>, role:<role>.
    #[arg(long, value_name = "SELECTOR[,SELECTOR...]")]
    pub include: Vec<String>,

    /// Exclude rows matching selectors. Repeatable and comma-separated.
    /// Selector format: row:<type>, event:<type>, response:<type>, role:<role>.
    #[arg(long, value_name = "SELECTOR[,SELECTOR...]")]
    pub exclude: Vec<String>,

    /// Print observed selector values and their default keep/drop status, then exit
    #[arg(long)]
    pub list_types: bool,

    /// Also generate a matching HTML viewer file beside the output JSONL
    #[arg(long)]
    pub with_html: bool,

    /// Config file path. Defaults to <config dir>/cle/config.toml
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as TOML, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Log progress to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
