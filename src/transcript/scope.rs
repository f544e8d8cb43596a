//! Start-index resolution.

use crate::error::ExportError;
use crate::record::Record;

/// Finds the index the exported conversation starts at.
///
/// Without an anchor this is the first `task_started` event (or 0). With an
/// anchor, the first user message containing it (case-insensitive) is located and
/// the start snaps back to the closest `task_started` at or before it.
pub fn resolve_start(records: &[Record], anchor: Option<&str>) -> Result<usize, ExportError> {
    let Some(anchor) = anchor.filter(|a| !a.is_empty()) else {
        let start = records.iter().position(Record::is_task_started).unwrap_or(0);
        tracing::debug!(start, "resolved start from first task_started");
        return Ok(start);
    };

    let needle = anchor.to_lowercase();
    let anchor_idx = records
        .iter()
        .position(|record| {
            record.is_user_message() && record.user_text().to_lowercase().contains(&needle)
        })
        .ok_or_else(|| ExportError::AnchorNotFound {
            anchor: anchor.to_string(),
        })?;

    let start = records[..=anchor_idx]
        .iter()
        .rposition(Record::is_task_started)
        .unwrap_or(anchor_idx);

    tracing::debug!(anchor_idx, start, "resolved start from anchor text");
    Ok(start)
}
