//! Character canvas the rink is drawn on.

use rink_types::{glyph, Point};

use crate::error::{CanvasError, Result};

/// Rectangular grid of display characters, stored row-major.
///
/// Rows always have exactly `width` columns. Writes outside the grid are
/// dropped, so shapes can be stamped near the edges without bounds checks
/// at every call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl Canvas {
    /// A `width` x `height` canvas filled with blanks.
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![glyph::BLANK; len],
        }
    }

    /// Build a canvas from caller-supplied rows.
    ///
    /// Fails with [`CanvasError::InvalidCanvas`] when there are no rows, the
    /// first row is empty, or any row differs in length from the first.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(CanvasError::invalid("no rows"));
        };
        let width = first.len();
        if width == 0 {
            return Err(CanvasError::invalid("first row is empty"));
        }
        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(CanvasError::invalid(format!(
                "row {y} has {} columns, expected {width}",
                row.len()
            )));
        }
        let w = u16::try_from(width).map_err(|_| CanvasError::invalid("too many columns"))?;
        let h = u16::try_from(rows.len()).map_err(|_| CanvasError::invalid("too many rows"))?;

        Ok(Self {
            width: w,
            height: h,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// True when the canvas has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.y as usize) * (self.width as usize) + (p.x as usize))
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < i32::from(self.width) && p.y < i32::from(self.height)
    }

    /// Row strictly inside the border: not the first or last row.
    #[inline]
    pub fn is_interior_row(&self, y: i32) -> bool {
        y > 0 && y < i32::from(self.height) - 1
    }

    /// Column strictly inside the border: not the first or last column.
    #[inline]
    pub fn is_interior_col(&self, x: i32) -> bool {
        x > 0 && x < i32::from(self.width) - 1
    }

    pub fn get(&self, p: Point) -> Option<char> {
        self.idx(p).map(|i| self.cells[i])
    }

    pub fn set(&mut self, p: Point, ch: char) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = ch;
        }
    }

    pub fn row(&self, y: u16) -> Option<&[char]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * (self.width as usize);
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Every row in order; a zero-width canvas still yields `height` empty rows.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        (0..self.height).filter_map(move |y| self.row(y))
    }

    pub fn fill_row(&mut self, y: u16, ch: char) {
        if y >= self.height {
            return;
        }
        let start = (y as usize) * (self.width as usize);
        self.cells[start..start + self.width as usize].fill(ch);
    }

    /// Owned copy of the rows, handy for tests and for feeding `from_rows`.
    pub fn to_rows(&self) -> Vec<Vec<char>> {
        self.rows().map(<[char]>::to_vec).collect()
    }
}
