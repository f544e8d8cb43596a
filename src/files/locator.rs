//! Source rollout discovery.
//!
//! The export pipeline only needs a path; where it comes from is behind the
//! [`SourceLocator`] trait so tests never depend on the home directory.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use walkdir::WalkDir;

use crate::error::ExportError;

/// Something that can produce the rollout file to export.
pub trait SourceLocator {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Resolve the source path. The path is guaranteed to exist on success.
    fn locate(&self) -> Result<PathBuf, ExportError>;
}

/// A user-supplied path (`--source`).
#[derive(Debug, Clone)]
pub struct ExplicitSource {
    path: PathBuf,
}

impl ExplicitSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: expand_tilde(path.as_ref()),
        }
    }
}

impl SourceLocator for ExplicitSource {
    fn name(&self) -> &'static str {
        "explicit"
    }

    fn locate(&self) -> Result<PathBuf, ExportError> {
        if self.path.is_file() {
            Ok(self.path.clone())
        } else {
            Err(ExportError::SourceNotFound {
                path: self.path.clone(),
            })
        }
    }
}

/// The most recently modified `<prefix>*.<extension>` file under a root directory.
#[derive(Debug, Clone)]
pub struct NewestRollout {
    root: PathBuf,
    file_prefix: String,
    extension: String,
}

impl NewestRollout {
    pub fn new(root: impl Into<PathBuf>, file_prefix: &str, extension: &str) -> Self {
        Self {
            root: root.into(),
            file_prefix: file_prefix.to_string(),
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// `~/.codex/sessions`, when a home directory is known.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".codex").join("sessions"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        let suffix = format!(".{}", self.extension);
        name.starts_with(&self.file_prefix) && name.ends_with(&suffix)
    }
}

impl SourceLocator for NewestRollout {
    fn name(&self) -> &'static str {
        "newest-rollout"
    }

    fn locate(&self) -> Result<PathBuf, ExportError> {
        let newest = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.file_type().is_file() && self.matches(entry.path()))
            .filter_map(|entry| {
                let modified = entry.metadata().ok()?.modified().unwrap_or(SystemTime::UNIX_EPOCH);
                Some((modified, entry.into_path()))
            })
            .max();

        match newest {
            Some((_, path)) => {
                tracing::debug!(path = %path.display(), "picked newest rollout");
                Ok(path)
            }
            None => Err(ExportError::NoRolloutFound {
                root: self.root.clone(),
            }),
        }
    }
}

/// Expands a leading `~` to the home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Ok(rest) = path.strip_prefix("~") else {
        return path.to_path_buf();
    };
    match dirs::home_dir() {
        Some(home) => home.join(rest),
        None => path.to_path_buf(),
    }
}
