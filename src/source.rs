//! Message input: JSON Lines or JSON array files of message records.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::analysis::MessageRecord;
use crate::error::SourceError;

/// Read message records from `path`.
///
/// A file whose first non-whitespace character is `[` is parsed as a
/// single JSON array; anything else is treated as JSON Lines, one record
/// per non-empty line. Line numbers in parse errors are 1-based.
pub fn read_records(path: &Path) -> Result<Vec<MessageRecord>, SourceError> {
    let raw = fs::read_to_string(path)?;
    let records = if raw.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<MessageRecord>>(&raw).map_err(|e| SourceError::Parse {
            line: e.line(),
            reason: e.to_string(),
        })?
    } else {
        parse_lines(&raw)?
    };
    warn_on_duplicate_ids(&records);
    debug!(path = %path.display(), count = records.len(), "records loaded");
    Ok(records)
}

fn parse_lines(raw: &str) -> Result<Vec<MessageRecord>, SourceError> {
    let mut records = Vec::new();
    for (number, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record: MessageRecord = serde_json::from_str(line).map_err(|e| SourceError::Parse {
            line: number + 1,
            reason: e.to_string(),
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Duplicate IDs are tolerated (each occurrence is analyzed) but worth
/// flagging: downstream consumers usually key on the ID.
fn warn_on_duplicate_ids(records: &[MessageRecord]) {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id.as_str()) {
            warn!(id = %record.id, "duplicate message id in input");
        }
    }
}
