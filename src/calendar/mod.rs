pub mod calendar_view;
pub mod dates;
pub mod grid;
pub mod proximity;
pub mod view_state;
#[cfg(test)]
mod tests;

pub use calendar_view::CalendarView;
pub use dates::{CalendarDate, DateKey};
pub use grid::GridCell;
pub use proximity::NearbyEvent;
pub use view_state::{Action, QuickFilter, ViewState};
