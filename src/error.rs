//! Export errors and their process exit codes.

use std::path::PathBuf;

use crate::filter::SelectorError;

/// Errors that can occur while exporting a conversation.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Source file not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },

    #[error("No rollout JSONL found under {}", .root.display())]
    NoRolloutFound { root: PathBuf },

    #[error("Invalid JSON on line {} of {}: {}", .line, .path.display(), .source)]
    InvalidJson {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Anchor text was not found in any user message.")]
    AnchorNotFound { anchor: String },

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("Failed to access {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}: {}", .path.display(), .message)]
    Config { path: PathBuf, message: String },
}

impl ExportError {
    /// Exit code: 2 for a bad invocation, 1 for bad or missing data.
    pub fn exit_code(&self) -> u8 {
        match self {
            ExportError::Selector(_) => 2,
            _ => 1,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}
