use crate::calendar::dates::CalendarDate;
use crate::calendar::grid::{GridCell, build_month_grid_from};
use crate::calendar::proximity::{NearbyEvent, events_on, nearby_events};
use crate::calendar::view_state::ViewState;
use crate::core::index::EventIndex;
use crate::core::models::EventRecord;
use crate::core::types::WeekStart;
use crate::errors::Result;

/// Everything derived from one `ViewState`: the month grid, the selected
/// day's own events and the nearby list. Rebuilt from scratch on every
/// state change.
#[derive(Debug, Clone)]
pub struct CalendarView<'a> {
    pub state: ViewState,
    pub today: CalendarDate,
    pub week_start: WeekStart,
    pub cells: Vec<GridCell>,
    pub selected_events: &'a [EventRecord],
    pub nearby: Vec<NearbyEvent>,
}

impl<'a> CalendarView<'a> {
    pub fn compute(
        state: ViewState,
        today: CalendarDate,
        index: &'a EventIndex,
        week_start: WeekStart,
    ) -> Result<Self> {
        let cells =
            build_month_grid_from(state.visible_year, state.visible_month, index, week_start)?;
        let selected_events = events_on(state.selected_date, index);
        let nearby = nearby_events(state.selected_date, state.range_days, index)?;

        Ok(Self {
            state,
            today,
            week_start,
            cells,
            selected_events,
            nearby,
        })
    }

    pub fn is_selected(&self, cell: &GridCell) -> bool {
        cell.key()
            .is_some_and(|key| *key == self.state.selected_date.key())
    }

    pub fn is_today(&self, cell: &GridCell) -> bool {
        cell.key().is_some_and(|key| *key == self.today.key())
    }

    /// The n-th (1-based) nearby event, as listed.
    pub fn nearby_at(&self, position: usize) -> Option<&NearbyEvent> {
        position.checked_sub(1).and_then(|i| self.nearby.get(i))
    }
}
