use std::io::{self, Write};

use crate::command::command_parser::CommandParser;
use crate::command::commands::CommandDyn;
use crate::core::context::AppContext;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::prompter::prompter::is_exit_word;
use crate::ui::ansi::STYLE_RESET;
use crate::ui::chrome::UiChrome;
use crate::ui::display_manager::DisplayManager;

/// The calendar screen: draws the month and tables, reads one command per
/// line and runs it against the session context.
pub struct MainFlow<'a> {
    ctx: &'a mut AppContext,
    command_parser: CommandParser,
    logger: Logger,
    dm: DisplayManager,
    chrome: UiChrome,
    redraw: bool,
}

impl<'a> MainFlow<'a> {
    pub fn new(ctx: &'a mut AppContext) -> Self {
        let logger = ctx.logger.clone();
        Self {
            ctx,
            command_parser: CommandParser::new(),
            logger,
            dm: DisplayManager::new(),
            chrome: UiChrome::new(),
            redraw: true,
        }
    }

    #[cfg(test)]
    pub(crate) fn wants_redraw(&self) -> bool {
        self.redraw
    }
}

impl<'a> Flow for MainFlow<'a> {
    fn render(&mut self) -> Result<()> {
        self.print_startup();
        if std::mem::take(&mut self.redraw) {
            self.draw_calendar();
        }
        self.chrome.print_prompt("> ");
        Ok(())
    }

    fn handle_input(&mut self, input: &str) -> Result<FlowCtrl> {
        self.prepare_output_space();
        let line = input.trim();
        if line.is_empty() {
            return Ok(FlowCtrl::Continue);
        }
        if is_exit_word(line) {
            return Ok(FlowCtrl::Finish);
        }

        let (raw_command, args) = CommandParser::split(line);
        let Some(cmd) = self.resolve_command(&raw_command, &args) else {
            self.redraw = false;
            return Ok(FlowCtrl::Continue);
        };

        self.logger
            .info(format!("Command run: {line}"), LogTarget::FileOnly);
        self.redraw = self.execute_command(&raw_command, cmd);
        Ok(FlowCtrl::Continue)
    }
}

impl<'a> MainFlow<'a> {
    fn print_startup(&mut self) {
        if self.ctx.startup_displayed {
            return;
        }
        self.chrome.print_banner();
        println!();
        println!("Type 'help' for commands, 'exit' to leave.");
        println!("Config path: {}", self.ctx.config_path.display());
        println!("Events path: {}", self.ctx.events_path.display());
        println!("Logs path: {}", self.ctx.logs_dir.display());
        println!();
        self.ctx.startup_displayed = true;
    }

    fn draw_calendar(&self) {
        match self.ctx.view() {
            Ok(view) => self.dm.display_calendar(&view),
            Err(err) => self.logger.error(
                format!("Unable to draw the calendar. {err}"),
                LogTarget::ConsoleAndFile,
            ),
        }
    }

    fn prepare_output_space(&self) {
        self.chrome.print_prompt_bottom_padding();
        println!();
        print!("{STYLE_RESET}");
        let _ = io::stdout().flush();
    }

    fn resolve_command<'b>(&self, raw_command: &str, args: &'b [String]) -> Option<CommandDyn<'b>> {
        match self.command_parser.parse(raw_command, args) {
            Ok(cmd) => Some(cmd),
            Err(err) => {
                self.logger.error(
                    format!("{err}. Type 'help' for the list of commands."),
                    LogTarget::ConsoleAndFile,
                );
                None
            }
        }
    }

    /// Returns whether the calendar should be drawn again.
    fn execute_command(&mut self, raw_command: &str, cmd: CommandDyn<'_>) -> bool {
        match cmd.execute(self.ctx) {
            Ok(redraw) => redraw,
            Err(err) => {
                self.handle_command_error(raw_command, err.to_string());
                false
            }
        }
    }

    fn handle_command_error(&self, raw_command: &str, err_text: String) {
        // usage hints go to the console only
        if let Some((head, tail)) = err_text.split_once("\nUsage:") {
            self.logger.error(
                format!("Command '{raw_command}' failed. {head}\nUsage:{tail}"),
                LogTarget::ConsoleOnly,
            );
            self.logger.error(
                format!("Command '{raw_command}' failed. {}", head.trim()),
                LogTarget::FileOnly,
            );
            return;
        }

        self.logger.error(
            format!("Command '{raw_command}' failed. {err_text}"),
            LogTarget::ConsoleAndFile,
        );
    }
}
