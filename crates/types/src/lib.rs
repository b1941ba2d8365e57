//! Shared types and constants for the rink renderer.
//!
//! Everything here is plain data with no behavior beyond small helpers, so
//! it can be used by the canvas builder, the terminal encoder and the CLI.
//!
//! # Layout fractions
//!
//! Rink markings are placed at fixed fractions of the canvas size. Every
//! product is truncated toward zero, never rounded.
//!
//! | Constant | Fraction | Applies to |
//! |----------|----------|------------|
//! | `GOAL_LINE_FRACTION` | 0.055 | width (left goal line, mirrored right) |
//! | `BLUE_LINE_FRACTION` | 0.375 | width (left blue line, mirrored right) |
//! | `CENTER_FRACTION` | 0.5 | width (center line) and height (goal mouth) |
//! | `FACEOFF_COLUMN_FRACTIONS` | 0.155, 0.4, 0.6, 0.845 | width |
//! | `FACEOFF_UPPER_FRACTION` | 0.1 | height |
//! | `FACEOFF_LOWER_FRACTION` | 0.9 | height |
//!
//! Faceoff dots use a radius of `width / DOT_RADIUS_DIVISOR` (integer
//! division); the center-ice circle always uses `CENTER_ICE_RADIUS`.
//!
//! # Examples
//!
//! ```
//! use rink_types::{scale, Point, RinkColor, GOAL_LINE_FRACTION};
//!
//! assert_eq!(scale(101, GOAL_LINE_FRACTION), 5);
//! assert_eq!(Point::new(3, 4), Point { x: 3, y: 4 });
//! assert_eq!(RinkColor::from_str("Cyan"), Some(RinkColor::Cyan));
//! ```

use serde::Serialize;

/// Left goal line position as a fraction of width.
pub const GOAL_LINE_FRACTION: f64 = 0.055;

/// Left blue line position as a fraction of width.
pub const BLUE_LINE_FRACTION: f64 = 0.375;

/// Center line (width) and goal mouth row (height).
pub const CENTER_FRACTION: f64 = 0.5;

/// Faceoff dot columns, left to right.
pub const FACEOFF_COLUMN_FRACTIONS: [f64; 4] = [0.155, 0.4, 0.6, 0.845];

/// Row of the four upper faceoff dots as a fraction of height.
pub const FACEOFF_UPPER_FRACTION: f64 = 0.1;

/// Row of the four lower faceoff dots as a fraction of height.
pub const FACEOFF_LOWER_FRACTION: f64 = 0.9;

/// Faceoff dot radius is `width / DOT_RADIUS_DIVISOR`.
pub const DOT_RADIUS_DIVISOR: i32 = 75;

/// Radius of the enlarged center-ice circle.
pub const CENTER_ICE_RADIUS: i32 = 2;

/// Glyphs used on the canvas.
pub mod glyph {
    pub const BLANK: char = ' ';

    pub const TOP_LEFT: char = '/';
    pub const TOP_FILL: char = '`';
    pub const TOP_RIGHT: char = '\\';

    pub const BOTTOM_LEFT: char = '\\';
    pub const BOTTOM_FILL: char = '_';
    pub const BOTTOM_RIGHT: char = '/';

    /// Border sides, zone lines and the side edges of circles.
    pub const VERTICAL: char = '|';

    pub const GOAL: char = '#';

    /// Default fill stamped at the center of a circle.
    pub const DOT: char = 'o';
}

/// Truncating `value * fraction`, matching how every layout coordinate is
/// derived.
#[inline]
pub fn scale(value: i32, fraction: f64) -> i32 {
    (f64::from(value) * fraction) as i32
}

/// A cell position. `x` is the column, `y` the row, origin top-left.
///
/// Coordinates are signed so that shapes centered off-canvas can still be
/// described; they are clipped when stamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The eight basic ANSI foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RinkColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl RinkColor {
    pub const ALL: [RinkColor; 8] = [
        RinkColor::Black,
        RinkColor::Red,
        RinkColor::Green,
        RinkColor::Yellow,
        RinkColor::Blue,
        RinkColor::Purple,
        RinkColor::Cyan,
        RinkColor::White,
    ];

    /// SGR foreground code (30-37).
    pub const fn ansi_code(self) -> u8 {
        match self {
            RinkColor::Black => 30,
            RinkColor::Red => 31,
            RinkColor::Green => 32,
            RinkColor::Yellow => 33,
            RinkColor::Blue => 34,
            RinkColor::Purple => 35,
            RinkColor::Cyan => 36,
            RinkColor::White => 37,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            RinkColor::Black => "black",
            RinkColor::Red => "red",
            RinkColor::Green => "green",
            RinkColor::Yellow => "yellow",
            RinkColor::Blue => "blue",
            RinkColor::Purple => "purple",
            RinkColor::Cyan => "cyan",
            RinkColor::White => "white",
        }
    }

    /// Parse a color name (case-insensitive).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_truncates() {
        assert_eq!(scale(101, BLUE_LINE_FRACTION), 37);
        assert_eq!(scale(25, FACEOFF_LOWER_FRACTION), 22);
        assert_eq!(scale(17, CENTER_FRACTION), 8);
        assert_eq!(scale(0, GOAL_LINE_FRACTION), 0);
    }

    #[test]
    fn color_codes_are_contiguous() {
        for (i, c) in RinkColor::ALL.iter().enumerate() {
            assert_eq!(c.ansi_code() as usize, 30 + i);
            assert_eq!(RinkColor::from_str(c.as_str()), Some(*c));
        }
        assert_eq!(RinkColor::from_str("magenta"), None);
    }
}
