//! `--list-types` handler

use std::path::Path;

use anyhow::Result;

use cle::export::list_types;
use cle::Record;

/// Print observed selectors of the scoped records with their default status.
#[cfg(not(tarpaulin_include))]
pub fn handle_list(source: &Path, records: &[Record], anchor: Option<&str>) -> Result<()> {
    let (start, report) = list_types(records, anchor)?;

    println!("source: {}", source.display());
    println!("start_index: {}", start);
    print!("{}", report);
    Ok(())
}
