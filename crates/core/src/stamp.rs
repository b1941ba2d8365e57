//! Diamond-approximated circles.
//!
//! A circle of radius `r` is drawn as a faceted diamond:
//!
//! ```text
//!   /`````\      top edge at cy - r, corners at cx -/+ (2r - 1)
//!  |       |
//!  |   o   |     side edges at cx -/+ 2r
//!  |       |
//!   \_____/      bottom edge at cy + r
//! ```
//!
//! Horizontal edges sweep offsets `1..=2r-1` while the side edges only
//! climb `offset / 2` rows, so the shape is wider than it is tall. This
//! compensates for terminal glyphs being taller than they are wide.
//!
//! Edge cells are never written onto the outermost rows or columns of the
//! canvas. The center cell, the center column of each horizontal edge and
//! the center row of each side edge are only clipped to the canvas itself.

use rink_types::{glyph, Point};

use crate::canvas::Canvas;
use crate::error::{CanvasError, Result};

/// A single circle to stamp. Transient: consumed by [`Circle::stamp_onto`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub center: Point,
    pub radius: i32,
    pub fill: char,
}

impl Circle {
    pub fn new(center: Point, radius: i32) -> Self {
        Self {
            center,
            radius,
            fill: glyph::DOT,
        }
    }

    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    pub fn stamp_onto(&self, canvas: &mut Canvas) -> Result<()> {
        stamp(canvas, self.center, self.radius, self.fill)
    }
}

/// Glyphs for one horizontal edge: left corner, body, right corner.
#[derive(Debug, Clone, Copy)]
struct EdgeGlyphs {
    left: char,
    fill: char,
    right: char,
}

const TOP_EDGE: EdgeGlyphs = EdgeGlyphs {
    left: glyph::TOP_LEFT,
    fill: glyph::TOP_FILL,
    right: glyph::TOP_RIGHT,
};

const BOTTOM_EDGE: EdgeGlyphs = EdgeGlyphs {
    left: glyph::BOTTOM_LEFT,
    fill: glyph::BOTTOM_FILL,
    right: glyph::BOTTOM_RIGHT,
};

/// Stamp a circle of `radius` centered at `center`, writing `fill` at the
/// center cell.
///
/// Returns [`CanvasError::InvalidCanvas`] for an empty canvas. A center
/// outside the canvas is not an error; nothing is drawn. A radius of zero
/// or less draws the center cell only.
pub fn stamp(canvas: &mut Canvas, center: Point, radius: i32, fill: char) -> Result<()> {
    if canvas.is_empty() {
        return Err(CanvasError::invalid(format!(
            "cannot stamp onto a {}x{} canvas",
            canvas.width(),
            canvas.height()
        )));
    }
    stamp_clipped(canvas, center, radius, fill);
    Ok(())
}

/// [`stamp`] without the empty-canvas check. An empty canvas contains no
/// center, so this is a no-op there.
pub(crate) fn stamp_clipped(canvas: &mut Canvas, center: Point, radius: i32, fill: char) {
    if !canvas.contains(center) {
        tracing::trace!(?center, radius, "circle center off canvas, skipped");
        return;
    }
    tracing::trace!(?center, radius, %fill, "stamping circle");

    canvas.set(center, fill);

    // Past width + height every edge cell is off canvas.
    let radius = radius
        .max(0)
        .min(i32::from(canvas.width()) + i32::from(canvas.height()));

    for offset in 1..radius * 2 {
        stamp_horizontal(canvas, center, radius, center.y - radius, offset, TOP_EDGE);
        stamp_horizontal(canvas, center, radius, center.y + radius, offset, BOTTOM_EDGE);
        stamp_vertical(canvas, center, center.x - radius * 2, offset);
        stamp_vertical(canvas, center, center.x + radius * 2, offset);
    }
}

fn stamp_horizontal(
    canvas: &mut Canvas,
    center: Point,
    radius: i32,
    row: i32,
    offset: i32,
    glyphs: EdgeGlyphs,
) {
    if !canvas.is_interior_row(row) {
        return;
    }
    canvas.set(Point::new(center.x, row), glyphs.fill);

    let corner = offset == radius * 2 - 1;
    let left = center.x - offset;
    if canvas.is_interior_col(left) {
        let ch = if corner { glyphs.left } else { glyphs.fill };
        canvas.set(Point::new(left, row), ch);
    }
    let right = center.x + offset;
    if canvas.is_interior_col(right) {
        let ch = if corner { glyphs.right } else { glyphs.fill };
        canvas.set(Point::new(right, row), ch);
    }
}

fn stamp_vertical(canvas: &mut Canvas, center: Point, column: i32, offset: i32) {
    if !canvas.is_interior_col(column) {
        return;
    }
    canvas.set(Point::new(column, center.y), glyph::VERTICAL);

    let dy = offset / 2;
    if canvas.is_interior_row(center.y - dy) {
        canvas.set(Point::new(column, center.y - dy), glyph::VERTICAL);
    }
    if canvas.is_interior_row(center.y + dy) {
        canvas.set(Point::new(column, center.y + dy), glyph::VERTICAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(c: &Canvas) -> Vec<String> {
        c.rows().map(|r| r.iter().collect()).collect()
    }

    #[test]
    fn radius_one_diamond() {
        let mut c = Canvas::new(7, 5);
        stamp(&mut c, Point::new(3, 2), 1, 'o').unwrap();
        assert_eq!(
            lines(&c),
            vec![
                "       ",
                "  /`\\  ",
                " | o | ",
                "  \\_/  ",
                "       ",
            ]
        );
    }

    #[test]
    fn radius_two_diamond() {
        // Offsets 1..=3: horizontal edges span cx-3..=cx+3 with corner glyphs
        // at the ends, side edges at cx-4 and cx+4 cover rows cy-1..=cy+1.
        let mut c = Canvas::new(11, 7);
        stamp(&mut c, Point::new(5, 3), 2, '*').unwrap();
        assert_eq!(
            lines(&c),
            vec![
                "           ",
                "  /`````\\  ",
                " |       | ",
                " |   *   | ",
                " |       | ",
                "  \\_____/  ",
                "           ",
            ]
        );
    }

    #[test]
    fn radius_zero_stamps_center_only() {
        let mut c = Canvas::new(5, 5);
        stamp(&mut c, Point::new(2, 2), 0, 'o').unwrap();
        let mut expected = Canvas::new(5, 5);
        expected.set(Point::new(2, 2), 'o');
        assert_eq!(c, expected);
    }

    #[test]
    fn extreme_radii_only_stamp_the_center() {
        for radius in [i32::MIN, -1, 1 << 30, i32::MAX] {
            let mut c = Canvas::new(7, 5);
            stamp(&mut c, Point::new(3, 2), radius, 'o').unwrap();
            let mut expected = Canvas::new(7, 5);
            expected.set(Point::new(3, 2), 'o');
            assert_eq!(c, expected, "radius {radius}");
        }
    }

    #[test]
    fn radius_cap_keeps_large_circles_unchanged() {
        // Radius 6 on a 9x5 canvas already lies entirely off canvas.
        let mut a = Canvas::new(9, 5);
        let mut b = Canvas::new(9, 5);
        stamp(&mut a, Point::new(4, 2), 6, 'o').unwrap();
        stamp(&mut b, Point::new(4, 2), 10_000, 'o').unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn off_canvas_center_is_noop() {
        let mut c = Canvas::new(5, 5);
        stamp(&mut c, Point::new(-1, 2), 3, 'o').unwrap();
        stamp(&mut c, Point::new(2, 5), 3, 'o').unwrap();
        stamp(&mut c, Point::new(5, 0), 3, 'o').unwrap();
        assert_eq!(c, Canvas::new(5, 5));
    }

    #[test]
    fn empty_canvas_is_invalid() {
        let mut c = Canvas::new(0, 3);
        let err = stamp(&mut c, Point::new(0, 0), 1, 'o').unwrap_err();
        assert!(matches!(err, CanvasError::InvalidCanvas { .. }));
    }

    #[test]
    fn edges_are_clipped_at_the_border() {
        // Circle centered next to the top-left corner: the top edge row is the
        // border row and the left edge column is column 0, so only the bottom
        // edge, right edge and center are drawn.
        let mut c = Canvas::new(8, 5);
        stamp(&mut c, Point::new(1, 1), 1, 'o').unwrap();
        assert_eq!(
            lines(&c),
            vec!["        ", " o |    ", " _/     ", "        ", "        "]
        );
    }

    #[test]
    fn circle_helper_uses_default_fill() {
        let mut a = Canvas::new(7, 5);
        let mut b = Canvas::new(7, 5);
        Circle::new(Point::new(3, 2), 1).stamp_onto(&mut a).unwrap();
        stamp(&mut b, Point::new(3, 2), 1, 'o').unwrap();
        assert_eq!(a, b);

        let mut c = Canvas::new(7, 5);
        Circle::new(Point::new(3, 2), 1)
            .with_fill('x')
            .stamp_onto(&mut c)
            .unwrap();
        assert_eq!(c.get(Point::new(3, 2)), Some('x'));
    }
}
