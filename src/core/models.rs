use serde::{Deserialize, Serialize};
use std::fmt;

/// One event as supplied by the surrounding application. The calendar engine
/// only ever reads these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    /// Display label ("10:00 AM"); never parsed.
    pub time: String,
    pub location: String,
}

impl EventRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        time: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            time: time.into(),
            location: location.into(),
        }
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Event(id={}, title='{}', time='{}', location='{}')",
            self.id, self.title, self.time, self.location
        )
    }
}
