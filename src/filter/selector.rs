//! Selectors: `prefix:value` tags matched by filtering rules.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// The four selector namespaces, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SelectorPrefix {
    /// Top-level `type` of a record.
    Row,
    /// `payload.type` of an `event_msg` row.
    Event,
    /// `payload.type` of a `response_item` row.
    Response,
    /// `payload.role` of a `message` response item.
    Role,
}

impl SelectorPrefix {
    pub const ALL: [SelectorPrefix; 4] = [
        SelectorPrefix::Row,
        SelectorPrefix::Event,
        SelectorPrefix::Response,
        SelectorPrefix::Role,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SelectorPrefix::Row => "row",
            SelectorPrefix::Event => "event",
            SelectorPrefix::Response => "response",
            SelectorPrefix::Role => "role",
        }
    }

    /// Case-sensitive lookup; callers lower-case first.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|prefix| prefix.as_str() == name)
    }
}

impl fmt::Display for SelectorPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized selector. The value is always lower-case and non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector {
    prefix: SelectorPrefix,
    value: String,
}

/// A set of selectors; ordering is only used for stable output.
pub type SelectorSet = BTreeSet<Selector>;

impl Selector {
    /// Build a selector from a known prefix, lower-casing the value.
    pub fn new(prefix: SelectorPrefix, value: &str) -> Self {
        Self {
            prefix,
            value: value.to_lowercase(),
        }
    }

    pub fn prefix(&self) -> SelectorPrefix {
        self.prefix
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.prefix, self.value)
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        normalize(raw)
    }
}

/// Errors produced while validating selector arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectorError {
    #[error("Empty selector is not allowed.")]
    Empty,

    #[error("Invalid selector '{raw}'. Expected '<prefix>:<value>' where prefix is one of: row, event, response, role.")]
    MissingSeparator { raw: String },

    #[error("Invalid selector prefix '{prefix}' in '{raw}'. Allowed prefixes: row, event, response, role.")]
    UnknownPrefix { prefix: String, raw: String },

    #[error("Invalid selector '{raw}'. Missing value after ':'. Expected '<prefix>:<value>'.")]
    MissingValue { raw: String },
}

/// Normalizes one raw selector such as `" ROW:Event_Msg "` into `row:event_msg`.
pub fn normalize(raw: &str) -> Result<Selector, SelectorError> {
    let token = raw.trim();
    if token.is_empty() {
        return Err(SelectorError::Empty);
    }

    let Some((prefix, value)) = token.split_once(':') else {
        return Err(SelectorError::MissingSeparator {
            raw: raw.to_string(),
        });
    };

    let prefix = prefix.trim().to_lowercase();
    let value = value.trim();

    let Some(known) = SelectorPrefix::from_name(&prefix) else {
        return Err(SelectorError::UnknownPrefix {
            prefix,
            raw: raw.to_string(),
        });
    };
    if value.is_empty() {
        return Err(SelectorError::MissingValue {
            raw: raw.to_string(),
        });
    }

    Ok(Selector::new(known, value))
}

/// Parses repeatable, comma-separated selector groups into one set.
///
/// Blank tokens are skipped, so `"row:a,,row:b,"` is accepted.
pub fn parse_selector_args<I, S>(groups: I) -> Result<SelectorSet, SelectorError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut selectors = SelectorSet::new();
    for group in groups {
        for token in group.as_ref().split(',') {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            selectors.insert(normalize(token)?);
        }
    }
    Ok(selectors)
}
