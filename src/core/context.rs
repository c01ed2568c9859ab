use crate::calendar::{Action, CalendarDate, CalendarView, ViewState};
use crate::config::Config;
use crate::core::index::EventIndex;
use crate::core::persist::load_event_index_or_empty;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use chrono::Local;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub index: EventIndex,
    pub logger: Logger,
    pub state: ViewState,
    pub today: CalendarDate,
    pub startup_displayed: bool,
    pub config_path: PathBuf,
    pub events_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(
        config_path: PathBuf,
        events_path: PathBuf,
        logs_dir: PathBuf,
    ) -> Result<Self> {
        let config = Config::load_or_create(&config_path)?;

        let logger = Logger::with_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        let (index, found) = load_event_index_or_empty(&events_path)?;
        if found {
            logger.info(
                format!(
                    "Loaded {} event(s) over {} day(s) from '{}'.",
                    index.total_events(),
                    index.len(),
                    events_path.display()
                ),
                LogTarget::FileOnly,
            );
        } else {
            logger.warn(
                format!(
                    "Events file '{}' not found; starting with no events.",
                    events_path.display()
                ),
                LogTarget::ConsoleAndFile,
            );
        }

        let today = resolve_today(&config)?;
        let state = ViewState::with_range(today, config.default_range());

        Ok(Self {
            config,
            index,
            logger,
            state,
            today,
            startup_displayed: false,
            config_path,
            events_path,
            logs_dir,
        })
    }

    /// Run one transition against the current snapshot. On error the
    /// snapshot is left untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let next = self.state.apply(action, self.today)?;
        self.logger.debug(format!(
            "{action:?}: {} -> {} (view {}-{:02}, range {})",
            self.state.selected_date,
            next.selected_date,
            next.visible_year,
            next.visible_month + 1,
            next.range_days
        ));
        self.state = next;
        Ok(())
    }

    /// Derived screen data for the current snapshot.
    pub fn view(&self) -> Result<CalendarView<'_>> {
        CalendarView::compute(
            self.state,
            self.today,
            &self.index,
            self.config.week_start(),
        )
    }

    /// Re-read settings that live outside the config file itself.
    pub fn sync_with_config(&mut self) -> Result<()> {
        self.logger
            .set_file_logging_enabled(self.config.file_logging_enabled());
        let today = resolve_today(&self.config)?;
        if today != self.today {
            self.today = today;
            self.state = self.state.go_today(today);
        }
        Ok(())
    }
}

/// The pinned date when configured, otherwise the local calendar date.
pub fn resolve_today(config: &Config) -> Result<CalendarDate> {
    match config.pinned_today() {
        Some(date) => Ok(date),
        None => CalendarDate::try_from(Local::now().date_naive()),
    }
}
