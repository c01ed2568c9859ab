use crate::calendar::dates::{CalendarDate, DateKey, day_difference, to_key};
use crate::core::index::EventIndex;
use crate::core::models::EventRecord;
use crate::core::types::RangeDays;
use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NearbyEvent {
    pub key: DateKey,
    /// Days from the selected date; positive is the future. Never zero.
    pub delta: i64,
    pub event: EventRecord,
}

impl NearbyEvent {
    pub fn distance(&self) -> i64 {
        self.delta.abs()
    }

    /// Short badge: "In 2d", "1d ago".
    pub fn relative_label(&self) -> String {
        relative_label(self.delta)
    }
}

pub fn relative_label(delta: i64) -> String {
    match delta {
        0 => "Today".to_string(),
        d if d > 0 => format!("In {d}d"),
        d => format!("{}d ago", d.abs()),
    }
}

/// Events stored under `date` itself, in supplied order.
pub fn events_on<'a>(date: CalendarDate, index: &'a EventIndex) -> &'a [EventRecord] {
    index.get(&to_key(date)).unwrap_or(&[])
}

/// Events within `range` days of `selected`, excluding `selected` itself,
/// closest first. Equal distances keep index order (stable sort), so an event
/// the day before stays ahead of one the day after when the earlier key was
/// inserted first.
pub fn nearby_events(
    selected: CalendarDate,
    range: RangeDays,
    index: &EventIndex,
) -> Result<Vec<NearbyEvent>> {
    let selected_key = to_key(selected);
    let radius = range.days();

    let mut nearby = Vec::new();
    for (key, events) in index.iter() {
        if *key == selected_key {
            continue;
        }
        let delta = day_difference(key.date()?, selected);
        if delta.abs() > radius {
            continue;
        }
        nearby.extend(events.iter().map(|event| NearbyEvent {
            key: key.clone(),
            delta,
            event: event.clone(),
        }));
    }

    nearby.sort_by_key(NearbyEvent::distance);
    Ok(nearby)
}
