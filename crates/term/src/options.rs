//! Output styling passed explicitly to each render call.

use crossterm::style::Color;

use crate::types::RinkColor;

/// How a canvas should be written to a terminal.
///
/// The default is plain text at the current cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions {
    /// Foreground color for every row. `None` emits no escape sequences.
    pub color: Option<RinkColor>,
    /// Bold/bright variant of `color`.
    pub bright: bool,
    /// Black background behind the rink.
    pub black_background: bool,
    /// Terminal `(column, row)` of the top-left corner. When set, each row
    /// is positioned with a cursor move instead of a newline.
    pub origin: Option<(u16, u16)>,
}

impl RenderOptions {
    pub fn with_color(mut self, color: RinkColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_bright(mut self, bright: bool) -> Self {
        self.bright = bright;
        self
    }

    pub fn with_black_background(mut self, black_background: bool) -> Self {
        self.black_background = black_background;
        self
    }

    pub fn with_origin(mut self, column: u16, row: u16) -> Self {
        self.origin = Some((column, row));
        self
    }

    /// True when any SGR sequence needs to be written.
    pub fn is_styled(&self) -> bool {
        self.color.is_some() || self.bright || self.black_background
    }
}

/// Map a basic ANSI color onto the crossterm palette entry with the same
/// SGR index.
pub fn rink_to_color(color: RinkColor) -> Color {
    match color {
        RinkColor::Black => Color::Black,
        RinkColor::Red => Color::DarkRed,
        RinkColor::Green => Color::DarkGreen,
        RinkColor::Yellow => Color::DarkYellow,
        RinkColor::Blue => Color::DarkBlue,
        RinkColor::Purple => Color::DarkMagenta,
        RinkColor::Cyan => Color::DarkCyan,
        RinkColor::White => Color::Grey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_colors_use_dark_palette_entries() {
        assert_eq!(rink_to_color(RinkColor::Red), Color::DarkRed);
        assert_eq!(rink_to_color(RinkColor::Purple), Color::DarkMagenta);
        assert_eq!(rink_to_color(RinkColor::White), Color::Grey);
    }

    #[test]
    fn default_is_plain() {
        let opts = RenderOptions::default();
        assert!(!opts.is_styled());
        assert!(opts.origin.is_none());
        assert!(RenderOptions::default().with_bright(true).is_styled());
        assert!(RenderOptions::default()
            .with_color(RinkColor::Blue)
            .is_styled());
    }
}
