//! Default keep/drop policy and include/exclude precedence.

use std::sync::OnceLock;

use regex::Regex;

use super::selector::{Selector, SelectorPrefix, SelectorSet};
use super::selectors;
use crate::record::Record;

/// Selectors hidden unless explicitly re-included.
pub const DEFAULT_HIDDEN: [(SelectorPrefix, &str); 8] = [
    (SelectorPrefix::Row, "session_meta"),
    (SelectorPrefix::Row, "turn_context"),
    (SelectorPrefix::Row, "event_msg"),
    (SelectorPrefix::Row, "compacted"),
    (SelectorPrefix::Response, "reasoning"),
    (SelectorPrefix::Response, "function_call_output"),
    (SelectorPrefix::Role, "developer"),
    (SelectorPrefix::Role, "system"),
];

/// Whether a selector is part of [`DEFAULT_HIDDEN`].
pub fn is_default_hidden(selector: &Selector) -> bool {
    DEFAULT_HIDDEN
        .iter()
        .any(|(prefix, value)| selector.prefix() == *prefix && selector.value() == *value)
}

/// [`DEFAULT_HIDDEN`] as selectors.
pub fn default_hidden() -> SelectorSet {
    DEFAULT_HIDDEN
        .iter()
        .map(|(prefix, value)| Selector::new(*prefix, value))
        .collect()
}

fn agents_header_re() -> &'static Regex {
    static AGENTS_HEADER_RE: OnceLock<Regex> = OnceLock::new();
    AGENTS_HEADER_RE.get_or_init(|| {
        Regex::new(r"(?i)^\s*#\s*AGENTS\.md instructions for\b").expect("valid agents header regex")
    })
}

/// Detects an injected `AGENTS.md` directive block in user text.
///
/// Requires the `# AGENTS.md instructions for ...` header at the start and both
/// `<instructions>` wrapper tags somewhere in the body.
pub fn is_agents_directive(text: &str) -> bool {
    let stripped = text.trim();
    if stripped.is_empty() || !agents_header_re().is_match(stripped) {
        return false;
    }

    let lowered = stripped.to_lowercase();
    lowered.contains("<instructions>") && lowered.contains("</instructions>")
}

/// Whether a record is a user message carrying an `AGENTS.md` directive.
pub fn is_agents_directive_row(record: &Record) -> bool {
    record.is_user_message() && is_agents_directive(&record.user_text())
}

/// Keep/drop decision before any user overrides.
pub fn keep_row_default(record: &Record) -> bool {
    if is_agents_directive_row(record) {
        return false;
    }
    !selectors(record).iter().any(is_default_hidden)
}

/// Applies include/exclude overrides on top of [`keep_row_default`].
///
/// Exclude wins over include; directive rows stay dropped whatever the include set says.
pub fn should_keep(record: &Record, include: &SelectorSet, exclude: &SelectorSet) -> bool {
    if is_agents_directive_row(record) {
        return false;
    }

    let selectors = selectors(record);
    let mut keep = !selectors.iter().any(is_default_hidden);

    if !include.is_empty() && !selectors.is_disjoint(include) {
        keep = true;
    }
    if !selectors.is_disjoint(exclude) {
        keep = false;
    }

    keep
}

/// A reusable include/exclude filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFilter {
    include: SelectorSet,
    exclude: SelectorSet,
}

impl RowFilter {
    pub fn new(include: SelectorSet, exclude: SelectorSet) -> Self {
        Self { include, exclude }
    }

    pub fn include(&self) -> &SelectorSet {
        &self.include
    }

    pub fn exclude(&self) -> &SelectorSet {
        &self.exclude
    }

    /// Whether a single record survives this filter.
    pub fn keeps(&self, record: &Record) -> bool {
        should_keep(record, &self.include, &self.exclude)
    }

    /// Kept records, in source order.
    pub fn apply<'a>(&self, records: &'a [Record]) -> Vec<&'a Record> {
        records.iter().filter(|record| self.keeps(record)).collect()
    }
}
