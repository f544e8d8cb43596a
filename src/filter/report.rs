//! Observed selector listing (`--list-types`).
//!
//! Lists every selector seen in a record sequence plus the default-hidden ones,
//! each with its default keep/drop status, so operators can discover what
//! `--include` / `--exclude` can target.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use super::policy::{is_default_hidden, DEFAULT_HIDDEN};
use super::selector::{Selector, SelectorPrefix};
use super::selectors;
use crate::record::{Record, EVENT_MSG};

/// What happens to rows carrying a selector when no overrides are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultStatus {
    Kept,
    Dropped,
}

impl fmt::Display for DefaultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultStatus::Kept => f.write_str("kept"),
            DefaultStatus::Dropped => f.write_str("dropped"),
        }
    }
}

/// Default status of a selector for reporting.
///
/// `event:*` selectors only ever appear on `row:event_msg` rows, so they are
/// reported as dropped while that row kind is hidden. Filtering itself does not
/// use this.
pub fn default_status(selector: &Selector) -> DefaultStatus {
    if is_default_hidden(selector) {
        return DefaultStatus::Dropped;
    }
    if selector.prefix() == SelectorPrefix::Event
        && is_default_hidden(&Selector::new(SelectorPrefix::Row, EVENT_MSG))
    {
        return DefaultStatus::Dropped;
    }
    DefaultStatus::Kept
}

/// Selector values grouped by prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorReport {
    values: BTreeMap<SelectorPrefix, BTreeSet<String>>,
}

impl SelectorReport {
    /// Collects selectors from `records` and adds the default-hidden ones.
    pub fn collect<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let mut values: BTreeMap<SelectorPrefix, BTreeSet<String>> = SelectorPrefix::ALL
            .into_iter()
            .map(|prefix| (prefix, BTreeSet::new()))
            .collect();

        let observed = records.into_iter().flat_map(selectors);
        let hidden = DEFAULT_HIDDEN
            .iter()
            .map(|(prefix, value)| Selector::new(*prefix, value));

        for selector in observed.chain(hidden) {
            values
                .entry(selector.prefix())
                .or_default()
                .insert(selector.value().to_string());
        }

        Self { values }
    }

    /// Sorted values recorded under `prefix`.
    pub fn values(&self, prefix: SelectorPrefix) -> impl Iterator<Item = &str> {
        self.values.get(&prefix).into_iter().flatten().map(String::as_str)
    }

    pub fn contains(&self, prefix: SelectorPrefix, value: &str) -> bool {
        self.values.get(&prefix).is_some_and(|set| set.contains(value))
    }

    /// All selectors in report order with their default status.
    pub fn entries(&self) -> Vec<(Selector, DefaultStatus)> {
        SelectorPrefix::ALL
            .into_iter()
            .flat_map(|prefix| {
                self.values(prefix)
                    .map(move |value| Selector::new(prefix, value))
                    .collect::<Vec<_>>()
            })
            .map(|selector| {
                let status = default_status(&selector);
                (selector, status)
            })
            .collect()
    }
}

impl fmt::Display for SelectorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "selector_types:")?;
        for prefix in SelectorPrefix::ALL {
            writeln!(f, "{}:", prefix)?;
            for value in self.values(prefix) {
                let selector = Selector::new(prefix, value);
                writeln!(f, "  - {} (default: {})", selector, default_status(&selector))?;
            }
        }
        Ok(())
    }
}
