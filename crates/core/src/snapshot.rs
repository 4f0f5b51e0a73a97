//! Field snapshots - plain data copied out of the field for renderers
//!
//! Grid content is flattened row-major, so a frame can be drawn without
//! borrowing the field.

use serde::Serialize;

use crate::cell::Cell;
use crate::field::GameStatus;
use crate::figure::Figure;

/// Read-only copy of the field handed to renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSnapshot {
    pub width: u16,
    pub height: u16,
    /// Content ids, row-major
    pub cells: Vec<u8>,
    pub figure: Option<Figure>,
    pub next: Option<Figure>,
    pub status: GameStatus,
}

impl Default for FieldSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            figure: None,
            next: None,
            status: GameStatus::Paused,
        }
    }
}

impl FieldSnapshot {
    /// Grid content at (x, y); 0 when out of bounds
    pub fn content_at(&self, x: u16, y: u16) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.cells[y as usize * self.width as usize + x as usize]
    }

    /// Occupied cells of the current figure
    pub fn figure_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.figure
            .iter()
            .flat_map(|f| f.occupied_cells().into_iter())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
