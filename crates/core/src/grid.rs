//! Grid module - the static playfield
//!
//! `height` rows of `width` cells, stored top to bottom.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height
//! (top to bottom). Rows above the field (`y < 0`) are never stored; collision
//! checks treat them as empty.

use crate::cell::Cell;
use crate::types::Size;

/// The field grid
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: Size,
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(size: Size) -> Self {
        let rows = (0..size.height as i16)
            .map(|y| Self::empty_row(size.width, y))
            .collect();
        Self { size, rows }
    }

    fn empty_row(width: u16, y: i16) -> Vec<Cell> {
        (0..width as i16).map(|x| Cell::empty(x, y)).collect()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> u16 {
        self.size.width
    }

    pub fn height(&self) -> u16 {
        self.size.height
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[inline]
    fn in_bounds(&self, x: i16, y: i16) -> bool {
        x >= 0 && y >= 0 && (x as u16) < self.size.width && (y as u16) < self.size.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds, including rows above the field
    pub fn get(&self, x: i16, y: i16) -> Option<&Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(&self.rows[y as usize][x as usize])
    }

    /// Write a content id at (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, content: u8) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        self.rows[y as usize][x as usize].set_content(content);
        true
    }

    /// Whether a figure cell may occupy (x, y)
    ///
    /// Horizontal bounds and the floor always apply. Rows above the field are
    /// free; everything else must be an empty cell.
    pub fn is_free(&self, x: i16, y: i16) -> bool {
        if x < 0 || x as u16 >= self.size.width || (y >= 0 && y as u16 >= self.size.height) {
            return false;
        }
        if y < 0 {
            return true;
        }
        self.rows[y as usize][x as usize].is_empty()
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows
            .get(y)
            .is_some_and(|row| row.iter().all(|c| !c.is_empty()))
    }

    /// Number of non-empty cells
    pub fn filled_count(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.iter().filter(|c| !c.is_empty()).count())
            .sum()
    }

    /// Write the content of occupied figure cells into the grid
    ///
    /// Cells above the field or outside it are dropped. Returns how many cells
    /// were written.
    pub fn merge<'a>(&mut self, cells: impl IntoIterator<Item = &'a Cell>) -> usize {
        let mut written = 0;
        for cell in cells {
            if cell.is_empty() {
                continue;
            }
            if self.set(cell.x(), cell.y(), cell.content()) {
                written += 1;
            }
        }
        written
    }

    /// Remove every full row and return how many were removed
    ///
    /// Surviving rows keep their order and content and sink to the bottom;
    /// fresh empty rows fill the top. Every cell is rebuilt with its new
    /// coordinates.
    pub fn clear_filled_rows(&mut self) -> u32 {
        let height = self.size.height as usize;
        let surviving: Vec<Vec<Cell>> = std::mem::take(&mut self.rows)
            .into_iter()
            .filter(|row| row.iter().any(Cell::is_empty))
            .collect();
        let missing = height - surviving.len();

        if missing == 0 {
            self.rows = surviving;
            return 0;
        }

        let width = self.size.width;
        let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(height);
        for y in 0..missing {
            rows.push(Self::empty_row(width, y as i16));
        }
        for (offset, row) in surviving.into_iter().enumerate() {
            let y = (missing + offset) as i16;
            rows.push(
                row.into_iter()
                    .enumerate()
                    .map(|(x, cell)| Cell::new(x as i16, y, cell.content()))
                    .collect(),
            );
        }
        self.rows = rows;

        missing as u32
    }

    /// Write content ids row-major into `out` (cleared first)
    pub fn write_content(&self, out: &mut Vec<u8>) {
        out.clear();
        out.reserve(self.size.width as usize * self.size.height as usize);
        for row in &self.rows {
            out.extend(row.iter().map(Cell::content));
        }
    }
}
