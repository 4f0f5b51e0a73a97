//! Cell - a single grid position and the figure type occupying it

use serde::Serialize;

use crate::catalog::Catalog;
use crate::types::{NamedColor, Point};

/// A grid position holding a content id (0 = empty, otherwise a figure type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Cell {
    x: i16,
    y: i16,
    content: u8,
}

impl Cell {
    pub fn new(x: i16, y: i16, content: u8) -> Self {
        Self { x, y, content }
    }

    pub fn empty(x: i16, y: i16) -> Self {
        Self::new(x, y, 0)
    }

    pub fn x(&self) -> i16 {
        self.x
    }

    pub fn y(&self) -> i16 {
        self.y
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn content(&self) -> u8 {
        self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content == 0
    }

    pub fn color(&self, catalog: &Catalog) -> NamedColor {
        catalog.color_for(self.content)
    }

    /// Only the field writes content, when a figure lands.
    pub(crate) fn set_content(&mut self, content: u8) {
        self.content = content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FigureKind;

    #[test]
    fn empty_cell_uses_background_color() {
        let cell = Cell::empty(3, 4);
        assert!(cell.is_empty());
        assert_eq!(cell.position(), Point::new(3, 4));
        assert_eq!(cell.color(Catalog::standard()), NamedColor::Black);
    }

    #[test]
    fn filled_cell_color_follows_kind() {
        let cell = Cell::new(0, 0, FigureKind::O.content());
        assert!(!cell.is_empty());
        assert_eq!(cell.color(Catalog::standard()), NamedColor::Yellow);

        let unknown = Cell::new(0, 0, 99);
        assert_eq!(unknown.color(Catalog::standard()), NamedColor::DarkBlue);
    }
}
