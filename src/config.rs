//! Configuration file handling.
//!
//! Settings live in `<config dir>/cle/config.toml`. Every field is optional;
//! a missing file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::files::filename;
use crate::files::locator::{expand_tilde, NewestRollout};

/// Application directory name under the platform config dir.
const APP_DIR: &str = "cle";

/// Config file name.
const CONFIG_FILE: &str = "config.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub export: ExportConfig,
}

/// Where rollout logs are discovered when `--source` is not given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Root searched for rollouts (default: `~/.codex/sessions`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions_dir: Option<PathBuf>,
    pub file_prefix: String,
    pub file_extension: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            sessions_dir: None,
            file_prefix: "rollout-".to_string(),
            file_extension: "jsonl".to_string(),
        }
    }
}

/// How exports are named and written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Export directory; relative paths resolve against the working directory.
    pub output_dir: PathBuf,
    pub max_slug_words: usize,
    pub max_slug_length: usize,
    pub with_html: bool,
    pub write_index: bool,
    /// Selector groups always re-included, merged with `--include`.
    pub include: Vec<String>,
    /// Selector groups always excluded, merged with `--exclude`.
    pub exclude: Vec<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        let slug = filename::Config::default();
        Self {
            output_dir: PathBuf::from("codex_sessions"),
            max_slug_words: slug.max_words,
            max_slug_length: slug.max_length,
            with_html: false,
            write_index: true,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl Config {
    /// Default config file location, if the platform has a config dir.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Loads from the default location, or defaults when there is none.
    pub fn load() -> Result<Self, ExportError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads from `path`; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ExportError> {
        let path = expand_tilde(path);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| ExportError::io(&path, e))?;
        Self::parse(&content).map_err(|message| ExportError::Config { path, message })
    }

    /// Parses TOML content.
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }

    /// Pretty TOML rendering of the effective configuration.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

impl SourceConfig {
    /// Locator for the newest rollout under the configured root.
    pub fn newest_rollout(&self) -> Result<NewestRollout, ExportError> {
        let root = match &self.sessions_dir {
            Some(dir) => expand_tilde(dir),
            None => NewestRollout::default_root().ok_or_else(|| ExportError::NoRolloutFound {
                root: PathBuf::from("~/.codex/sessions"),
            })?,
        };
        Ok(NewestRollout::new(root, &self.file_prefix, &self.file_extension))
    }
}

impl ExportConfig {
    pub fn slug_config(&self) -> filename::Config {
        filename::Config::new(self.max_slug_words, self.max_slug_length)
    }

    /// Export directory resolved against `cwd`.
    pub fn export_dir(&self, cwd: &Path) -> PathBuf {
        let dir = expand_tilde(&self.output_dir);
        if dir.is_absolute() {
            dir
        } else {
            cwd.join(dir)
        }
    }
}
