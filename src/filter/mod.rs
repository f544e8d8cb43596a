//! Row classification and keep/drop filtering.
//!
//! Every record is classified into up to three [`Selector`]s (`row:*`, then
//! `event:*` or `response:*`, then `role:*` for messages). Filtering starts from
//! a fixed default policy and applies user include/exclude sets on top of it.
//!
//! # Module Structure
//!
//! - [`selector`] - selector type, normalization and argument parsing
//! - [`policy`] - default-hidden set, directive detection, include/exclude precedence
//! - [`report`] - observed selector listing for `--list-types`

pub mod policy;
pub mod report;
pub mod selector;

pub use policy::{is_agents_directive, keep_row_default, should_keep, RowFilter, DEFAULT_HIDDEN};
pub use report::{default_status, DefaultStatus, SelectorReport};
pub use selector::{normalize, parse_selector_args, Selector, SelectorError, SelectorPrefix, SelectorSet};

use crate::record::{Record, RecordKind, MESSAGE};

/// Derives the selectors of one record.
///
/// Untyped records yield an empty set. Values are lower-cased, but the
/// `event_msg` / `response_item` / `message` checks match the raw spelling.
pub fn selectors(record: &Record) -> SelectorSet {
    let mut selectors = SelectorSet::new();
    let Some(row_type) = record.row_type() else {
        return selectors;
    };
    selectors.insert(Selector::new(SelectorPrefix::Row, row_type));

    match record.kind() {
        RecordKind::Event(event) => {
            if let Some(event_type) = &event.event_type {
                selectors.insert(Selector::new(SelectorPrefix::Event, event_type));
            }
        }
        RecordKind::Response(item) => {
            if let Some(item_type) = &item.item_type {
                let response = Selector::new(SelectorPrefix::Response, item_type);
                if response.value() == MESSAGE {
                    if let Some(role) = &item.role {
                        selectors.insert(Selector::new(SelectorPrefix::Role, role));
                    }
                }
                selectors.insert(response);
            }
        }
        RecordKind::Other(_) | RecordKind::Untyped => {}
    }

    selectors
}
