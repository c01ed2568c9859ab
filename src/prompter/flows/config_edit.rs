use crate::config::{ConfigKey, ConfigRows};
use crate::core::context::AppContext;
use crate::core::types::{RangeDays, WeekStart};
use crate::errors::Result;
use crate::logging::LogTarget;
use crate::prompter::models::{ConfigState, Flow, FlowCtrl};
use crate::ui::ansi::STYLE_RESET;
use crate::ui::chrome::UiChrome;
use crate::ui::display_manager::DisplayManager;
use std::io::Write;
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Table-driven editor for the persisted settings.
pub struct ConfigEditFlow<'a> {
    ctx: &'a mut AppContext,
    dm: DisplayManager,
    chrome: UiChrome,
    state: ConfigState,
    rows_cache: ConfigRows,
    selected_idx: Option<usize>,
    frame_width: usize,
}

impl<'a> ConfigEditFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let rows = ctx.config.rows();
        Self {
            ctx,
            dm: DisplayManager::new(),
            chrome: UiChrome::new(),
            state: ConfigState::ShowTable,
            rows_cache: rows,
            selected_idx: None,
            frame_width: 60,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> ConfigState {
        self.state
    }

    #[cfg(test)]
    pub(crate) fn selected_index(&self) -> Option<usize> {
        self.selected_idx
    }

    fn selected_row(&self) -> Option<(&str, &str, &str)> {
        self.selected_idx
            .and_then(|i| self.rows_cache.get(i))
            .map(|(k, d, v)| (k.as_str(), d.as_str(), v.as_str()))
    }

    fn possible_options(&self) -> Option<String> {
        let (key, _, _) = self.selected_row()?;
        let lines: Vec<String> = match ConfigKey::from_str(key).ok()? {
            ConfigKey::DefaultRange => RangeDays::iter()
                .map(|r| format!("{r}: look {} day(s) around the selection", r.days()))
                .collect(),
            ConfigKey::WeekStart => WeekStart::iter()
                .map(|w| format!("{w}: {}", w.help()))
                .collect(),
            ConfigKey::Today => {
                vec!["YYYY-MM-DD, or empty to follow the system clock".to_string()]
            }
            ConfigKey::FileLoggingEnabled => vec![
                "True: write log messages to the session file".to_string(),
                "False: keep log messages on the console only".to_string(),
            ],
        };
        Some(lines.join("\n"))
    }

    fn render_prompt(&self, message: &str) {
        self.chrome.println_centered_in_box(message, self.frame_width);
        self.chrome.print_centered_prefix_plain("> ", self.frame_width);
    }

    fn render_new_value_prompt(&self, show_details: bool) {
        if let Some((_, desc, val)) = self.selected_row().filter(|_| show_details) {
            self.chrome.println_centered_in_box(desc, self.frame_width);
            self.chrome
                .println_centered_in_box(&format!("Current value: {val}"), self.frame_width);
        }
        if let Some(opts) = self.possible_options() {
            self.chrome
                .println_centered_in_box(&format!("Possible options: {opts}"), self.frame_width);
        }
        self.render_prompt("Enter new value: ");
    }

    fn render_table(&mut self) {
        self.chrome.clear_screen();
        self.frame_width = self.dm.display_config_centered(&self.ctx.config);
        self.render_prompt("Would you like to edit a setting? (Y/N)");
    }
}

impl<'a> Flow for ConfigEditFlow<'a> {
    fn render(&mut self) -> Result<()> {
        match self.state {
            ConfigState::ShowTable => self.render_table(),
            ConfigState::SelectId => self.render_prompt(&format!(
                "Enter ID (0..{}): ",
                self.rows_cache.len().saturating_sub(1)
            )),
            ConfigState::ShowCurrent => {
                self.render_new_value_prompt(true);
                self.state = ConfigState::AskNewValue;
            }
            ConfigState::AskNewValue => self.render_new_value_prompt(false),
            ConfigState::Done => {}
        }
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        print!("{STYLE_RESET}");
        let _ = std::io::stdout().flush();
        match self.state {
            ConfigState::ShowTable => Ok(self.handle_table_input(input)),
            ConfigState::SelectId => Ok(self.handle_select_id_input(input)),
            // render() moves on by itself
            ConfigState::ShowCurrent => Ok(FlowCtrl::Continue),
            ConfigState::AskNewValue => self.handle_new_value_input(input),
            ConfigState::Done => Ok(FlowCtrl::Finish),
        }
    }
}

impl<'a> ConfigEditFlow<'a> {
    fn handle_table_input(&mut self, input: &str) -> FlowCtrl {
        match input {
            "y" | "Y" => self.state = ConfigState::SelectId,
            "n" | "N" => {
                self.state = ConfigState::Done;
                return FlowCtrl::Finish;
            }
            _ => self
                .chrome
                .println_centered_in_box("Please enter Y or N.", self.frame_width),
        }
        FlowCtrl::Continue
    }

    fn handle_select_id_input(&mut self, input: &str) -> FlowCtrl {
        let len = self.rows_cache.len();
        match input.parse::<usize>() {
            Ok(id) if id < len => {
                self.selected_idx = Some(id);
                self.state = ConfigState::ShowCurrent;
            }
            _ => self.chrome.println_centered_in_box(
                &format!("Invalid ID. Please enter 0..{}.", len.saturating_sub(1)),
                self.frame_width,
            ),
        }
        FlowCtrl::Continue
    }

    fn handle_new_value_input(&mut self, input: &str) -> Result<FlowCtrl> {
        let Some(idx) = self.selected_idx else {
            self.state = ConfigState::SelectId;
            return Ok(FlowCtrl::Continue);
        };

        match self.ctx.config.set_by_index(idx, input) {
            Ok(()) => {
                if let Some((key, _, _)) = self.rows_cache.get(idx) {
                    self.chrome
                        .println_centered_in_box(&format!("Updated {key}."), self.frame_width);
                }
                if let Some((key, old, new)) = self.ctx.config.take_last_change() {
                    self.log_config_change(&key, &old, &new);
                }
                self.ctx.sync_with_config()?;
                self.rows_cache = self.ctx.config.rows();
                self.state = ConfigState::ShowTable;
            }
            Err(e) => {
                self.chrome
                    .println_centered_in_box(&format!("Error: {e}"), self.frame_width);
                self.state = ConfigState::AskNewValue;
            }
        }
        Ok(FlowCtrl::Continue)
    }

    /// Turning file logging off still records the change that did it.
    fn log_config_change(&mut self, key: &str, old: &str, new: &str) {
        let message = format!("Config '{key}' updated: '{old}' -> '{new}'");
        let is_file_logging_key =
            matches!(ConfigKey::from_str(key), Ok(ConfigKey::FileLoggingEnabled));
        if !is_file_logging_key {
            self.ctx.logger.info(message, LogTarget::FileOnly);
            return;
        }

        let file_enabled = self.ctx.config.file_logging_enabled();
        self.ctx.logger.set_file_logging_enabled(true);
        self.ctx.logger.info(message, LogTarget::FileOnly);
        self.ctx.logger.set_file_logging_enabled(file_enabled);
    }
}
