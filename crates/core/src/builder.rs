//! Builds a complete rink canvas for a requested size.

use rink_types::{glyph, Point};

use crate::canvas::Canvas;
use crate::layout::RinkLayout;
use crate::stamp::stamp_clipped;

/// Build a `width` x `height` rink.
///
/// Sizes below 3x3 leave no interior and produce a canvas with only
/// partial markings, but never panic.
pub fn create(width: u16, height: u16) -> Canvas {
    let layout = RinkLayout::compute(width, height);
    tracing::debug!(width, height, ?layout, "rink layout");
    create_from_layout(&layout)
}

/// Draw a rink for an already computed layout.
pub fn create_from_layout(layout: &RinkLayout) -> Canvas {
    let width = u16::try_from(layout.width).unwrap_or(0);
    let height = u16::try_from(layout.height).unwrap_or(0);
    let mut canvas = Canvas::new(width, height);
    if canvas.is_empty() {
        return canvas;
    }

    draw_boards(&mut canvas);
    draw_lines(&mut canvas, layout);

    // Dots go last: stamping overwrites lines and goals it crosses.
    for &dot in &layout.dots {
        stamp_clipped(&mut canvas, dot, layout.dot_radius, glyph::DOT);
    }
    stamp_clipped(
        &mut canvas,
        layout.center_ice,
        layout.center_ice_radius,
        glyph::DOT,
    );

    canvas
}

fn draw_boards(canvas: &mut Canvas) {
    let right = i32::from(canvas.width()) - 1;

    canvas.fill_row(0, glyph::TOP_FILL);
    canvas.set(Point::new(0, 0), glyph::TOP_LEFT);
    canvas.set(Point::new(right, 0), glyph::TOP_RIGHT);

    // A single-row canvas keeps the top border.
    if canvas.height() > 1 {
        let last = canvas.height() - 1;
        let y = i32::from(last);
        canvas.fill_row(last, glyph::BOTTOM_FILL);
        canvas.set(Point::new(0, y), glyph::BOTTOM_LEFT);
        canvas.set(Point::new(right, y), glyph::BOTTOM_RIGHT);
    }
}

fn draw_lines(canvas: &mut Canvas, layout: &RinkLayout) {
    for y in 1..layout.height - 1 {
        for x in layout.line_columns() {
            canvas.set(Point::new(x, y), glyph::VERTICAL);
        }
    }
    for goal in layout.goals() {
        canvas.set(goal, glyph::GOAL);
    }
}
