//! Rink marking coordinates derived from the canvas size.

use arrayvec::ArrayVec;
use serde::Serialize;

use rink_types::{
    scale, Point, BLUE_LINE_FRACTION, CENTER_FRACTION, CENTER_ICE_RADIUS, DOT_RADIUS_DIVISOR,
    FACEOFF_COLUMN_FRACTIONS, FACEOFF_LOWER_FRACTION, FACEOFF_UPPER_FRACTION, GOAL_LINE_FRACTION,
};

/// Number of faceoff dots: four per end zone row plus center ice.
pub const FACEOFF_DOT_COUNT: usize = 9;

/// Columns and rows of every rink marking for one canvas size.
///
/// Pure function of `(width, height)`; recompute it for every canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RinkLayout {
    pub width: i32,
    pub height: i32,
    pub goal_left: i32,
    pub goal_right: i32,
    pub blue_left: i32,
    pub blue_right: i32,
    pub center: i32,
    /// Row of the goal mouths and of the center faceoff dot.
    pub goal_row: i32,
    pub faceoff_upper: i32,
    pub faceoff_lower: i32,
    pub dot_radius: i32,
    /// Upper row left to right, center ice, then lower row left to right.
    pub dots: ArrayVec<Point, FACEOFF_DOT_COUNT>,
    /// Center of the enlarged circle, on the bottom border row.
    pub center_ice: Point,
    pub center_ice_radius: i32,
}

impl RinkLayout {
    pub fn compute(width: u16, height: u16) -> Self {
        let w = i32::from(width);
        let h = i32::from(height);

        let goal_left = scale(w, GOAL_LINE_FRACTION);
        let blue_left = scale(w, BLUE_LINE_FRACTION);
        let center = scale(w, CENTER_FRACTION);
        let goal_row = scale(h, CENTER_FRACTION);
        let faceoff_upper = scale(h, FACEOFF_UPPER_FRACTION);
        let faceoff_lower = scale(h, FACEOFF_LOWER_FRACTION);

        let mut dots = ArrayVec::new();
        for fraction in FACEOFF_COLUMN_FRACTIONS {
            dots.push(Point::new(scale(w, fraction), faceoff_upper));
        }
        dots.push(Point::new(center, goal_row));
        for fraction in FACEOFF_COLUMN_FRACTIONS {
            dots.push(Point::new(scale(w, fraction), faceoff_lower));
        }

        Self {
            width: w,
            height: h,
            goal_left,
            goal_right: w - (goal_left + 1),
            blue_left,
            blue_right: w - (blue_left + 1),
            center,
            goal_row,
            faceoff_upper,
            faceoff_lower,
            dot_radius: w / DOT_RADIUS_DIVISOR,
            dots,
            center_ice: Point::new(center, h - 1),
            center_ice_radius: CENTER_ICE_RADIUS,
        }
    }

    /// Columns that carry a vertical line on every interior row: both
    /// boards, goal lines, blue lines and the center line.
    pub fn line_columns(&self) -> [i32; 7] {
        [
            0,
            self.goal_left,
            self.blue_left,
            self.center,
            self.blue_right,
            self.goal_right,
            self.width - 1,
        ]
    }

    pub fn goals(&self) -> [Point; 2] {
        [
            Point::new(self.goal_left, self.goal_row),
            Point::new(self.goal_right, self.goal_row),
        ]
    }
}
