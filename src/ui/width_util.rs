use terminal_size::{Width, terminal_size};

use crate::ui::ascii::ESC;
type CharIter<'a> = std::iter::Peekable<std::str::Chars<'a>>;

/// Width helpers that ignore CSI sequences. Widths count chars, so glyphs
/// such as `•` and `±` are one column each.
#[derive(Debug, Default, Clone)]
pub struct WidthUtil;

impl WidthUtil {
    pub fn strip_ansi(s: &str) -> String {
        let mut out = String::with_capacity(s.len());
        let mut chars = s.chars().peekable();

        while let Some(c) = chars.next() {
            if c == ESC && chars.peek() == Some(&'[') {
                Self::consume_csi(&mut chars);
                continue;
            }
            out.push(c);
        }
        out
    }

    fn consume_csi(chars: &mut CharIter<'_>) {
        let _ = chars.next(); // '['
        for c in chars.by_ref() {
            if c.is_ascii_alphabetic() {
                break;
            }
        }
    }

    pub fn visible_width(&self, s: &str) -> usize {
        Self::strip_ansi(s).chars().count()
    }

    pub fn pad_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            return s.to_string();
        }
        format!("{s}{}", " ".repeat(width - w))
    }

    /// Center `s` inside `width` columns; wider content is returned as is.
    pub fn center_visible(&self, s: &str, width: usize) -> String {
        let w = self.visible_width(s);
        if w >= width {
            return s.to_string();
        }
        let left = (width - w) / 2;
        let right = width - w - left;
        format!("{}{s}{}", " ".repeat(left), " ".repeat(right))
    }

    /// Best-effort terminal width (defaults to 80).
    pub fn terminal_width(&self) -> usize {
        match terminal_size() {
            Some((Width(w), _)) => w as usize,
            None => 80,
        }
    }

    /// Left padding to center a box of `content_width` inside the terminal.
    pub fn center_pad(&self, content_width: usize) -> usize {
        self.terminal_width().saturating_sub(content_width) / 2
    }
}
