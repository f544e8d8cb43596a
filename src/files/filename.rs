//! Output file naming for exported conversations.
//!
//! Exports are named `<timestamp>_<goal-slug>.jsonl`, where the timestamp comes
//! from the first exported record and the slug from the conversation goal.

use std::path::{Path, PathBuf};

use unicode_normalization::UnicodeNormalization;

use crate::record::Record;
use crate::transcript::goal_text;

/// Minimum allowed value for the slug limits.
const MIN_SLUG_LIMIT: usize = 1;

/// Default fallback slug when the goal has no usable characters.
const FALLBACK_SLUG: &str = "conversation";

/// Number of digits in a timestamp prefix (`YYYYMMDDhhmmss`).
pub const TIMESTAMP_PREFIX_LEN: usize = 14;

/// Extension of exported transcripts.
pub const JSONL_EXTENSION: &str = "jsonl";

/// Extension of generated viewer pages.
pub const HTML_EXTENSION: &str = "html";

/// Configuration for slug generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of words kept from the goal (default: 10, minimum: 1).
    pub max_words: usize,
    /// Maximum slug length in characters (default: 64, minimum: 1).
    pub max_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_words: 10,
            max_length: 64,
        }
    }
}

impl Config {
    /// Creates a new Config, ensuring both limits are at least 1.
    pub fn new(max_words: usize, max_length: usize) -> Self {
        Self {
            max_words: max_words.max(MIN_SLUG_LIMIT),
            max_length: max_length.max(MIN_SLUG_LIMIT),
        }
    }
}

/// Turns goal text into a lower-case, hyphen-separated ASCII slug.
///
/// Applies the following transformations in order:
/// 1. Unicode NFKD decomposition (accents split from their base letter)
/// 2. Non-ASCII characters dropped
/// 3. Lower-case, split into alphanumeric words
/// 4. First `max_words` words joined with hyphens
/// 5. Truncated to `max_length`, trailing hyphens trimmed
/// 6. Empty results → "conversation" fallback
pub fn slugify_goal(goal: &str, config: &Config) -> String {
    let ascii: String = goal.nfkd().filter(char::is_ascii).collect();
    let lowered = ascii.to_ascii_lowercase();

    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|word| !word.is_empty())
        .take(config.max_words)
        .collect();

    let joined = words.join("-");
    // ASCII only, so byte truncation is safe
    let truncated = &joined[..joined.len().min(config.max_length)];
    let slug = truncated.trim_matches('-');

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug.to_string()
    }
}

/// First 14 digits of a timestamp such as `2026-02-15T14:20:00Z`.
///
/// Returns `None` when fewer than 14 digits are present.
pub fn timestamp_prefix(timestamp: &str) -> Option<String> {
    let digits: String = timestamp.chars().filter(char::is_ascii_digit).collect();
    if digits.len() >= TIMESTAMP_PREFIX_LEN {
        Some(digits[..TIMESTAMP_PREFIX_LEN].to_string())
    } else {
        None
    }
}

/// Timestamp prefix of the record at `start`, if any.
pub fn record_timestamp_prefix(records: &[Record], start: usize) -> Option<String> {
    records
        .get(start)
        .and_then(Record::timestamp)
        .and_then(timestamp_prefix)
}

/// Composes `<prefix>_<slug>.jsonl`, or `<slug>.jsonl` without a prefix.
pub fn export_file_name(prefix: Option<&str>, slug: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}_{}.{}", prefix, slug, JSONL_EXTENSION),
        None => format!("{}.{}", slug, JSONL_EXTENSION),
    }
}

/// Default export file name for a conversation starting at `start`.
pub fn default_file_name(records: &[Record], start: usize, config: &Config) -> String {
    let slug = slugify_goal(&goal_text(records, start), config);
    let prefix = record_timestamp_prefix(records, start);
    export_file_name(prefix.as_deref(), &slug)
}

/// Default export path: [`default_file_name`] inside `export_dir`.
pub fn default_output_path(
    export_dir: &Path,
    records: &[Record],
    start: usize,
    config: &Config,
) -> PathBuf {
    export_dir.join(default_file_name(records, start, config))
}

/// Splits an export stem into its timestamp prefix and slug.
///
/// Stems that do not start with 14 digits and an underscore have no prefix and
/// use the whole stem as slug.
pub fn parse_session_stem(stem: &str) -> (Option<&str>, &str) {
    let bytes = stem.as_bytes();
    let has_prefix = bytes.len() > TIMESTAMP_PREFIX_LEN + 1
        && bytes[..TIMESTAMP_PREFIX_LEN].iter().all(u8::is_ascii_digit)
        && bytes[TIMESTAMP_PREFIX_LEN] == b'_';

    if has_prefix {
        (
            Some(&stem[..TIMESTAMP_PREFIX_LEN]),
            &stem[TIMESTAMP_PREFIX_LEN + 1..],
        )
    } else {
        (None, stem)
    }
}
