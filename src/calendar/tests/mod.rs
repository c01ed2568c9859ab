
use crate::calendar::dates::{CalendarDate, DateKey, from_key};
use crate::core::index::EventIndex;
use crate::core::models::EventRecord;

pub(super) fn date(key: &str) -> CalendarDate {
    from_key(key).unwrap()
}

pub(super) fn key(s: &str) -> DateKey {
    DateKey::parse(s).unwrap()
}

pub(super) fn event(id: &str, title: &str) -> EventRecord {
    EventRecord::new(id, title, "10:00 AM", "Estadio Nacional")
}

/// October 2023 sports calendar: two events on the 15th and 28th, one on
/// the 18th, 22nd and 25th.
pub(super) fn sample_index() -> EventIndex {
    let mut index = EventIndex::new();
    index.insert(
        key("2023-10-15"),
        vec![
            event("1", "Campeonato Nacional de Fútbol"),
            event("2", "Entrenamiento Equipo Juvenil"),
        ],
    );
    index.insert(key("2023-10-18"), vec![event("3", "Torneo de Tenis Amateur")]);
    index.insert(key("2023-10-22"), vec![event("4", "Maratón Ciudad 2023")]);
    index.insert(
        key("2023-10-25"),
        vec![event("5", "Clase de Yoga al Aire Libre")],
    );
    index.insert(
        key("2023-10-28"),
        vec![
            event("6", "Partido Amistoso Fútbol"),
            event("7", "Torneo de Basquetbol"),
        ],
    );
    index
}

pub(super) fn ids(events: &[crate::calendar::proximity::NearbyEvent]) -> Vec<&str> {
    events.iter().map(|n| n.event.id.as_str()).collect()
}
