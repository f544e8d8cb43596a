//! File handling: naming, JSONL I/O and source discovery.

pub mod filename;
pub mod jsonl;
pub mod locator;

pub use locator::{ExplicitSource, NewestRollout, SourceLocator};
