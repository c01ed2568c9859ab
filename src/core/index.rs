use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::calendar::dates::DateKey;
use crate::core::models::EventRecord;

/// Events grouped by day.
///
/// Keys iterate in insertion order (document order when deserialized), and
/// each day's list keeps the order it was supplied in. The proximity query
/// relies on the former for its tie-break.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventIndex {
    days: IndexMap<DateKey, Vec<EventRecord>>,
}

impl EventIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list stored under `key`, keeping the key's original position.
    pub fn insert(&mut self, key: DateKey, events: Vec<EventRecord>) {
        self.days.insert(key, events);
    }

    /// Append one event to the end of `key`'s list.
    pub fn push(&mut self, key: DateKey, event: EventRecord) {
        self.days.entry(key).or_default().push(event);
    }

    pub fn get(&self, key: &DateKey) -> Option<&[EventRecord]> {
        self.days.get(key).map(Vec::as_slice)
    }

    /// True when at least one event is stored under `key`.
    pub fn has_events(&self, key: &DateKey) -> bool {
        self.get(key).is_some_and(|events| !events.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DateKey, &[EventRecord])> {
        self.days.iter().map(|(key, events)| (key, events.as_slice()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &DateKey> {
        self.days.keys()
    }

    /// Number of distinct days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn total_events(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

impl FromIterator<(DateKey, Vec<EventRecord>)> for EventIndex {
    fn from_iter<I: IntoIterator<Item = (DateKey, Vec<EventRecord>)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}
