use crate::core::index::EventIndex;
use crate::errors::{Error, Result};
use std::fs;
use std::path::Path;

/// Read an events file: one JSON object mapping `YYYY-MM-DD` keys to event
/// lists. Key order in the file becomes the index's iteration order.
pub fn load_event_index(path: &Path) -> Result<EventIndex> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        Error::Parse(format!(
            "Invalid events file '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Like `load_event_index`, but a missing file is an empty index.
/// Returns whether the file existed.
pub fn load_event_index_or_empty(path: &Path) -> Result<(EventIndex, bool)> {
    if !path.exists() {
        return Ok((EventIndex::new(), false));
    }
    load_event_index(path).map(|index| (index, true))
}
