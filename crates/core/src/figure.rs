//! Figure module - the active falling shape
//!
//! A figure is a content-tagged bitmap plus an anchor (the bitmap's top-left
//! corner in field coordinates). Rotation replaces the bitmap and never moves
//! the anchor; there are no wall kicks.
//!
//! `move_by`/`rotate` do not validate anything. Callers ask
//! `can_move`/`can_rotate` first.

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::catalog::ShapeDef;
use crate::cell::Cell;
use crate::grid::Grid;
use crate::types::{Direction, FigureKind, Point, Size, SPAWN_Y};

/// Bitmaps are at most 4x4
pub const MAX_FIGURE_CELLS: usize = 16;

/// Cells of one figure, stack-allocated
pub type FigureCells = ArrayVec<Cell, MAX_FIGURE_CELLS>;

/// Rotate a matrix 90° clockwise: `new[r][c] = old[rows - 1 - c][r]`
pub fn rotate_matrix(matrix: &[Vec<u8>]) -> Vec<Vec<u8>> {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, Vec::len);
    (0..cols)
        .map(|r| (0..rows).map(|c| matrix[rows - 1 - c][r]).collect())
        .collect()
}

/// A movable, rotatable figure
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Figure {
    kind: FigureKind,
    matrix: Vec<Vec<u8>>,
    anchor: Point,
    spawn: Point,
    field_size: Size,
}

impl Figure {
    /// Instantiate a catalog shape at `anchor`
    pub fn new(shape: &ShapeDef, anchor: Point, field_size: Size) -> Self {
        let content = shape.kind.content();
        let matrix = shape
            .bitmap
            .iter()
            .map(|row| row.iter().map(|&v| if v > 0 { content } else { 0 }).collect())
            .collect();
        Self {
            kind: shape.kind,
            matrix,
            anchor,
            spawn: anchor,
            field_size,
        }
    }

    /// Instantiate a shape centered horizontally on the spawn row
    pub fn spawn(shape: &ShapeDef, field_size: Size) -> Self {
        Self::new(shape, Self::spawn_anchor(shape, field_size), field_size)
    }

    /// `x = floor(width / 2 - bitmap_size / 2)`, `y = SPAWN_Y`
    pub fn spawn_anchor(shape: &ShapeDef, field_size: Size) -> Point {
        let n = shape.bitmap.len() as i16;
        let x = (field_size.width as i16 - n).div_euclid(2);
        Point::new(x, SPAWN_Y)
    }

    pub fn kind(&self) -> FigureKind {
        self.kind
    }

    pub fn matrix(&self) -> &[Vec<u8>] {
        &self.matrix
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn x(&self) -> i16 {
        self.anchor.x
    }

    pub fn y(&self) -> i16 {
        self.anchor.y
    }

    pub fn field_size(&self) -> Size {
        self.field_size
    }

    /// Whether the anchor is still where the figure was spawned
    pub fn is_at_spawn(&self) -> bool {
        self.anchor == self.spawn
    }

    /// Translate the anchor by one unit in `direction`
    pub fn move_by(&mut self, direction: Direction) {
        self.anchor = self.anchor.offset(direction);
    }

    /// True only if every occupied cell, moved by `direction`, is inside the
    /// field (or above it) and lands on an empty grid cell.
    pub fn can_move(&self, direction: Direction, grid: &Grid) -> bool {
        let (dx, dy) = direction.offset();
        self.occupied_cells()
            .iter()
            .all(|c| self.fits(grid, c.x() + dx, c.y() + dy))
    }

    /// Replace the bitmap with its clockwise rotation
    pub fn rotate(&mut self) {
        self.matrix = rotate_matrix(&self.matrix);
    }

    /// Lookahead: would the rotated bitmap fit at the current anchor?
    pub fn can_rotate(&self, grid: &Grid) -> bool {
        let rotated = rotate_matrix(&self.matrix);
        Self::cells_of(&rotated, self.anchor)
            .iter()
            .filter(|c| !c.is_empty())
            .all(|c| self.fits(grid, c.x(), c.y()))
    }

    fn fits(&self, grid: &Grid, x: i16, y: i16) -> bool {
        if x < 0 || x as u16 >= self.field_size.width {
            return false;
        }
        if y >= 0 && y as u16 >= self.field_size.height {
            return false;
        }
        grid.is_free(x, y)
    }

    fn cells_of(matrix: &[Vec<u8>], anchor: Point) -> FigureCells {
        let mut out = FigureCells::new();
        for (dy, row) in matrix.iter().enumerate() {
            for (dx, &content) in row.iter().enumerate() {
                out.push(Cell::new(anchor.x + dx as i16, anchor.y + dy as i16, content));
            }
        }
        out
    }

    /// Every bitmap cell in absolute coordinates, empty ones included
    pub fn cells(&self) -> FigureCells {
        Self::cells_of(&self.matrix, self.anchor)
    }

    /// Occupied cells in absolute coordinates
    pub fn occupied_cells(&self) -> FigureCells {
        let mut cells = self.cells();
        cells.retain(|c| !c.is_empty());
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn figure(kind: FigureKind) -> Figure {
        Figure::spawn(Catalog::standard().shape(kind), Size::new(10, 20))
    }

    #[test]
    fn spawn_is_centered_above_the_field() {
        assert_eq!(figure(FigureKind::I).anchor(), Point::new(3, -1));
        assert_eq!(figure(FigureKind::T).anchor(), Point::new(3, -1));
        assert_eq!(figure(FigureKind::O).anchor(), Point::new(4, -1));
    }

    #[test]
    fn matrix_is_tagged_with_kind() {
        let fig = figure(FigureKind::S);
        let content = FigureKind::S.content();
        for cell in fig.occupied_cells() {
            assert_eq!(cell.content(), content);
        }
        assert_eq!(fig.occupied_cells().len(), 4);
        assert_eq!(fig.cells().len(), 9);
    }

    #[test]
    fn rotate_matrix_clockwise() {
        let m = vec![vec![1, 2], vec![3, 4]];
        assert_eq!(rotate_matrix(&m), vec![vec![3, 1], vec![4, 2]]);

        let rect = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(rotate_matrix(&rect), vec![vec![4, 1], vec![5, 2], vec![6, 3]]);
    }

    #[test]
    fn four_rotations_restore_the_bitmap() {
        let mut fig = figure(FigureKind::L);
        let original = fig.matrix().to_vec();
        for _ in 0..4 {
            fig.rotate();
        }
        assert_eq!(fig.matrix(), original.as_slice());
    }

    #[test]
    fn rotation_keeps_the_anchor() {
        let mut fig = figure(FigureKind::T);
        let anchor = fig.anchor();
        fig.rotate();
        assert_eq!(fig.anchor(), anchor);
    }

    #[test]
    fn can_move_sideways_while_partly_above_field() {
        let grid = Grid::new(Size::new(10, 20));
        let fig = figure(FigureKind::J);
        assert!(fig.occupied_cells().iter().any(|c| c.y() < 0));
        assert!(fig.can_move(Direction::Left, &grid));
        assert!(fig.can_move(Direction::Right, &grid));
    }

    #[test]
    fn move_tracks_spawn() {
        let mut fig = figure(FigureKind::O);
        assert!(fig.is_at_spawn());
        fig.move_by(Direction::Down);
        assert!(!fig.is_at_spawn());
        assert_eq!(fig.anchor(), Point::new(4, 0));
    }
}
