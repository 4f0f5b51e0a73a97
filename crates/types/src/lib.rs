//! Core types module - shared data structures and constants
//!
//! This module defines the vocabulary shared by the simulation core, the input
//! mapping and the terminal renderer. Everything here is plain data.
//!
//! # Field Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn row**: -1 (one row above the visible field)
//!
//! # Descent Timing
//!
//! The descent timer works in "speed" units. The interval between automatic
//! descents is `max_speed * 2 - speed * 2` milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_START_SPEED` | 295 | Speed at game start |
//! | `DEFAULT_MAX_SPEED` | 400 | Upper bound for the speed ramp |
//! | `TICK_MS` | 16 | Runner frame step (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_blockfall_types::{Action, Direction, FigureKind, DEFAULT_FIELD_SIZE};
//!
//! assert_eq!(FigureKind::from_content(1), Some(FigureKind::I));
//! assert_eq!(FigureKind::T.content(), 7);
//!
//! assert_eq!(Action::Left.direction(), Some(Direction::Left));
//! assert_eq!(Direction::Down.offset(), (0, 1));
//!
//! assert_eq!(DEFAULT_FIELD_SIZE.width, 10);
//! assert_eq!(DEFAULT_FIELD_SIZE.height, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Default field width in cells (10 columns)
pub const DEFAULT_FIELD_WIDTH: u16 = 10;

/// Default field height in cells (20 rows)
pub const DEFAULT_FIELD_HEIGHT: u16 = 20;

/// Default playfield size
pub const DEFAULT_FIELD_SIZE: Size = Size {
    width: DEFAULT_FIELD_WIDTH,
    height: DEFAULT_FIELD_HEIGHT,
};

/// Anchor row of a freshly spawned figure (one row above the visible field)
pub const SPAWN_Y: i16 = -1;

/// Descent speed at game start
pub const DEFAULT_START_SPEED: u32 = 295;

/// Descent speed ceiling
pub const DEFAULT_MAX_SPEED: u32 = 400;

/// Number of upcoming figures kept in the lookahead window
pub const DEFAULT_DISPLAYED_FIGURES: usize = 1;

/// Points per cleared row
pub const DEFAULT_SCORE_MULTIPLIER: u32 = 100;

/// Fixed timestep of the terminal runner in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Integer grid position. Origin is top-left; `y` may be negative while a
/// figure is still partly above the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    /// Translate by a direction's unit vector
    pub fn offset(self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Field dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u16,
    pub height: u16,
}

impl Size {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        DEFAULT_FIELD_SIZE
    }
}

/// The four unit movement vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// `(dx, dy)` of this direction, with `y` growing downwards
    pub fn offset(&self) -> (i16, i16) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// The fixed action vocabulary accepted from the input collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Rotate the figure 90° clockwise
    Rotate,
    /// Move the figure one row down (lands it when blocked)
    Down,
    /// Move the figure one column left
    Left,
    /// Move the figure one column right
    Right,
}

impl Action {
    /// Movement direction of this action; `None` for rotation
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Action::Rotate => None,
            Action::Down => Some(Direction::Down),
            Action::Left => Some(Direction::Left),
            Action::Right => Some(Direction::Right),
        }
    }

    /// Parse action from its lowercase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blockfall_types::Action;
    ///
    /// assert_eq!(Action::from_str("rotate"), Some(Action::Rotate));
    /// assert_eq!(Action::from_str("LEFT"), Some(Action::Left));
    /// assert_eq!(Action::from_str("up"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "rotate" => Some(Action::Rotate),
            "down" => Some(Action::Down),
            "left" => Some(Action::Left),
            "right" => Some(Action::Right),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Rotate => "rotate",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }
}

/// The seven figure kinds, in catalog order
///
/// The catalog index + 1 is the content id written into the grid, so the
/// order here is stable and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FigureKind {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

impl FigureKind {
    pub const ALL: [FigureKind; 7] = [
        FigureKind::I,
        FigureKind::J,
        FigureKind::L,
        FigureKind::O,
        FigureKind::S,
        FigureKind::Z,
        FigureKind::T,
    ];

    /// Catalog position (0-based)
    pub fn index(&self) -> usize {
        match self {
            FigureKind::I => 0,
            FigureKind::J => 1,
            FigureKind::L => 2,
            FigureKind::O => 3,
            FigureKind::S => 4,
            FigureKind::Z => 5,
            FigureKind::T => 6,
        }
    }

    /// Content id written into grid cells (1-based, 0 means empty)
    pub fn content(&self) -> u8 {
        self.index() as u8 + 1
    }

    pub fn from_content(content: u8) -> Option<Self> {
        match content {
            0 => None,
            c => Self::ALL.get(c as usize - 1).copied(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FigureKind::I => "I",
            FigureKind::J => "J",
            FigureKind::L => "L",
            FigureKind::O => "O",
            FigureKind::S => "S",
            FigureKind::Z => "Z",
            FigureKind::T => "T",
        }
    }
}

/// Display colors used by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedColor {
    Black,
    Red,
    Blue,
    Purple,
    Yellow,
    Green,
    Cyan,
    Orange,
    DarkBlue,
}

impl NamedColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Blue => "blue",
            NamedColor::Purple => "purple",
            NamedColor::Yellow => "yellow",
            NamedColor::Green => "green",
            NamedColor::Cyan => "cyan",
            NamedColor::Orange => "orange",
            NamedColor::DarkBlue => "darkblue",
        }
    }
}
