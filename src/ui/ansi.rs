// Shared ANSI/VT100 control sequences used across the UI.

/// Switch to the terminal's alternate screen buffer (smcup).
pub const ENTER_ALT_SCREEN: &str = crate::csi!("?1049h");
/// Return to the main screen buffer (rmcup).
pub const EXIT_ALT_SCREEN: &str = crate::csi!("?1049l");

pub const CLEAR_SCREEN: &str = crate::csi!("2J");
pub const CURSOR_HOME: &str = crate::csi!("H");
/// Clear from cursor to end of line.
pub const CLEAR_LINE_REST: &str = crate::csi!("0K");
pub const CURSOR_UP_ONE: &str = crate::csi!("1A");

pub const HIDE_CURSOR: &str = crate::csi!("?25l");
pub const SHOW_CURSOR: &str = crate::csi!("?25h");
/// Request a blinking block cursor (if the terminal supports it).
pub const CURSOR_BLINKING_BLOCK: &str = crate::csi!("1 q");

pub const STYLE_RESET: &str = crate::csi!("0m");
pub const STYLE_BOLD: &str = crate::csi!("1m");
pub const STYLE_ITALIC: &str = crate::csi!("3m");
/// Swapped foreground/background, used for the selected day.
pub const STYLE_REVERSE: &str = crate::csi!("7m");
pub const FG_LIGHT_GRAY: &str = crate::csi!("37m");
/// Today's cell.
pub const FG_CYAN: &str = crate::csi!("36m");
/// Event marker.
pub const FG_YELLOW: &str = crate::csi!("33m");
/// Dark gray background with white text for input prompts.
pub const PROMPT_STYLE: &str = crate::csi2!("38;5;15m", "48;5;236m");
