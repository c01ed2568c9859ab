use crate::errors::{Error, Result};
use crate::prompter::models::{Flow, FlowCtrl};
use crate::ui::ansi::{
    CURSOR_BLINKING_BLOCK, CURSOR_HOME, ENTER_ALT_SCREEN, EXIT_ALT_SCREEN, HIDE_CURSOR, SHOW_CURSOR,
};
use std::io::{self, BufRead, Write};

/// Drives a `Flow` line by line until it finishes, input ends or the user
/// types an exit word.
#[derive(Debug, Default, Clone)]
pub struct Prompter;

struct AltScreenGuard;
impl AltScreenGuard {
    fn enter() -> Self {
        print!("{ENTER_ALT_SCREEN}{CURSOR_HOME}");
        let _ = io::stdout().flush();
        Self
    }
}
impl Drop for AltScreenGuard {
    fn drop(&mut self) {
        print!("{SHOW_CURSOR}{EXIT_ALT_SCREEN}");
        let _ = io::stdout().flush();
    }
}

pub fn is_exit_word(line: &str) -> bool {
    line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit")
}

impl Prompter {
    pub fn new() -> Self {
        Self
    }

    fn hide_cursor() {
        print!("{HIDE_CURSOR}");
        let _ = io::stdout().flush();
    }

    fn show_cursor_blinking() {
        print!("{SHOW_CURSOR}{CURSOR_BLINKING_BLOCK}");
        let _ = io::stdout().flush();
    }

    /// Reads stdin a line at a time without holding its lock, so a nested
    /// prompter (the config editor) can read from it too.
    pub fn run<F: Flow>(&self, flow: F, use_alt_screen: bool) -> Result<()> {
        let stdin = io::stdin();
        self.drive(flow, use_alt_screen, |buf| stdin.read_line(buf))
    }

    pub fn run_with_reader<F: Flow, R: BufRead>(
        &self,
        flow: F,
        use_alt_screen: bool,
        mut reader: R,
    ) -> Result<()> {
        self.drive(flow, use_alt_screen, |buf| reader.read_line(buf))
    }

    fn drive<F, L>(&self, mut flow: F, use_alt_screen: bool, mut next_line: L) -> Result<()>
    where
        F: Flow,
        L: FnMut(&mut String) -> io::Result<usize>,
    {
        let _alt = use_alt_screen.then(AltScreenGuard::enter);

        loop {
            Self::hide_cursor();
            flow.render()?;
            Self::show_cursor_blinking();

            let mut line = String::new();
            if next_line(&mut line).map_err(Error::Io)? == 0 {
                return Ok(());
            }
            let line = line.trim();
            if is_exit_word(line) {
                return Ok(());
            }

            match flow.handle_input(line)? {
                FlowCtrl::Continue => continue,
                FlowCtrl::Finish | FlowCtrl::Abort => return Ok(()),
            }
        }
    }
}
