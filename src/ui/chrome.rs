use crate::ui::ansi::{
    CLEAR_LINE_REST, CLEAR_SCREEN, CURSOR_HOME, CURSOR_UP_ONE, FG_LIGHT_GRAY, PROMPT_STYLE,
    STYLE_BOLD, STYLE_ITALIC, STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const BANNER_INNER_WIDTH: usize = 50;

/// Screen-level helpers (banner, clearing, centering prompts).
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn banner_lines(&self) -> Vec<String> {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}A G E N D A{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Your month at a glance{STYLE_RESET}");
        let blank = " ".repeat(BANNER_INNER_WIDTH);
        vec![
            format!("╭{}╮", "─".repeat(BANNER_INNER_WIDTH)),
            format!("│{blank}│"),
            format!("│{}│", self.util.center_visible(&title, BANNER_INNER_WIDTH)),
            format!("│{}│", self.util.center_visible(&subtitle, BANNER_INNER_WIDTH)),
            format!("│{blank}│"),
            format!("╰{}╯", "─".repeat(BANNER_INNER_WIDTH)),
        ]
    }

    pub fn print_banner(&self) {
        for line in self.banner_lines() {
            println!("{line}");
        }
    }

    pub fn clear_screen(&self) {
        print!("{CLEAR_SCREEN}{CURSOR_HOME}");
        let _ = io::stdout().flush();
    }

    pub fn print_centered_prefix_plain(&self, prefix: &str, box_width: usize) {
        let line = self.format_centered_prefix(prefix, box_width);
        print!("{line}");
        let _ = io::stdout().flush();
    }

    pub fn print_prompt(&self, prompt: &str) {
        self.print_prompt_padding_line();
        print!("{PROMPT_STYLE}{prompt}{CLEAR_LINE_REST}{STYLE_RESET}\n");
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}");
        // park the cursor right after the prompt text
        let column = self.util.visible_width(prompt) + 1;
        print!("{CURSOR_UP_ONE}\x1B[{column}G{PROMPT_STYLE}");
        let _ = io::stdout().flush();
    }

    pub fn println_centered_in_box(&self, s: &str, box_width: usize) {
        println!("{}", self.format_centered_line(s, box_width));
    }

    pub fn format_centered_prefix(&self, prefix: &str, box_width: usize) -> String {
        let left = self.util.center_pad(box_width);
        format!("{}{}", " ".repeat(left), prefix)
    }

    pub fn format_centered_line(&self, s: &str, box_width: usize) -> String {
        let left = self.util.center_pad(box_width);
        let inner = box_width.saturating_sub(self.util.visible_width(s)) / 2;
        format!("{}{s}", " ".repeat(left + inner))
    }

    pub fn print_prompt_bottom_padding(&self) {
        self.print_prompt_padding_line();
        let _ = io::stdout().flush();
    }

    fn print_prompt_padding_line(&self) {
        print!("{PROMPT_STYLE}{CLEAR_LINE_REST}{STYLE_RESET}\n");
    }
}
