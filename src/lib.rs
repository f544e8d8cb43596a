//! Conversation Log Export
//!
//! Extracts a clean, shareable conversation transcript from a Codex rollout log.
//! Rows are classified into selectors, filtered by a default policy with
//! include/exclude overrides, scoped to the relevant task, and written back as
//! JSONL with a derived goal-based file name.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod files;
pub mod filter;
pub mod record;
pub mod transcript;
pub mod viewer;

pub use config::Config;
pub use error::ExportError;
pub use export::{export, select, ExportOptions, ExportSummary, Transcript};
pub use filter::{RowFilter, Selector, SelectorSet};
pub use record::Record;
