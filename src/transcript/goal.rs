//! Goal text derivation.
//!
//! The goal is a one-line title for the conversation, used for the default
//! output file name and the viewer title. A single commit-style title written
//! by the assistant wins; otherwise the first line of the first real user
//! request is used.

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::filter::is_agents_directive;
use crate::record::Record;

/// Goal used when nothing better can be found.
pub const FALLBACK_GOAL: &str = "conversation";

fn commit_title_re() -> &'static Regex {
    static COMMIT_TITLE_RE: OnceLock<Regex> = OnceLock::new();
    COMMIT_TITLE_RE.get_or_init(|| {
        Regex::new(r"(?i)^(?:us-\d+|f-\d+|p-\d+|t-\d+|b-\d+|id:\d+)\b.+$")
            .expect("valid commit title regex")
    })
}

fn code_block_re() -> &'static Regex {
    static CODE_BLOCK_RE: OnceLock<Regex> = OnceLock::new();
    CODE_BLOCK_RE.get_or_init(|| {
        Regex::new(r"(?s)```[^\n`]*\n(.*?)```").expect("valid code block regex")
    })
}

/// Whether a single line looks like `us-123 add export naming`.
pub fn is_commit_title(line: &str) -> bool {
    commit_title_re().is_match(line)
}

fn first_non_blank_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|line| !line.is_empty())
}

/// Commit-style titles in one message: the first line of each fenced block,
/// then the first line of the message itself.
pub fn commit_titles_in(text: &str) -> Vec<String> {
    let blocks = code_block_re()
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .filter_map(|block| first_non_blank_line(block.as_str()));

    blocks
        .chain(first_non_blank_line(text))
        .filter(|line| is_commit_title(line))
        .map(String::from)
        .collect()
}

/// The single distinct commit title in assistant messages from `start` on.
///
/// Titles are deduplicated case-insensitively; zero or several distinct titles
/// give `None`.
pub fn generated_commit_title(records: &[Record], start: usize) -> Option<String> {
    let mut seen = HashSet::new();
    let mut titles = Vec::new();

    for record in records.iter().skip(start) {
        let text = record.assistant_text();
        if text.is_empty() {
            continue;
        }
        for title in commit_titles_in(&text) {
            if seen.insert(title.to_lowercase()) {
                titles.push(title);
            }
        }
    }

    if titles.len() == 1 {
        titles.pop()
    } else {
        if titles.len() > 1 {
            tracing::debug!(count = titles.len(), "ambiguous commit titles, using user text");
        }
        None
    }
}

/// First line of the first non-directive user message from `start` on.
pub fn first_user_line(records: &[Record], start: usize) -> Option<String> {
    records.iter().skip(start).find_map(|record| {
        let text = record.user_text();
        if text.is_empty() || is_agents_directive(&text) {
            return None;
        }
        first_non_blank_line(&text).map(String::from)
    })
}

/// Derives the conversation goal. Never fails.
pub fn goal_text(records: &[Record], start: usize) -> String {
    generated_commit_title(records, start)
        .or_else(|| first_user_line(records, start))
        .unwrap_or_else(|| FALLBACK_GOAL.to_string())
}
