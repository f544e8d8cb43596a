//! Line-oriented JSON reading and writing.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ExportError;
use crate::record::Record;

/// Loads every non-blank line of `path` as a record.
///
/// Fails on the first malformed line, reporting its 1-based line number.
pub fn load_records(path: &Path) -> Result<Vec<Record>, ExportError> {
    let file = fs::File::open(path).map_err(|e| ExportError::io(path, e))?;
    read_records(BufReader::new(file), path)
}

/// Reads records from any buffered reader; `path` is only used in errors.
pub fn read_records<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Record>, ExportError> {
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| ExportError::io(path, e))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value = serde_json::from_str(line).map_err(|source| ExportError::InvalidJson {
            path: path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        records.push(Record::from_value(value));
    }

    tracing::debug!(path = %path.display(), rows = records.len(), "loaded rollout records");
    Ok(records)
}

/// Renders records as compact JSON, one per line, non-ASCII left unescaped.
pub fn to_jsonl<'a, I>(records: I) -> Result<String, serde_json::Error>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

/// Writes records to `path`, creating parent directories as needed.
///
/// The whole file is rendered before anything touches the disk.
pub fn write_records<'a, I>(path: &Path, records: I) -> Result<u64, ExportError>
where
    I: IntoIterator<Item = &'a Record>,
{
    let content = to_jsonl(records).map_err(|e| ExportError::io(path, e.into()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
    }
    fs::write(path, &content).map_err(|e| ExportError::io(path, e))?;

    Ok(content.len() as u64)
}
