//! Core simulation - pure, deterministic, and testable
//!
//! This crate holds the falling-block rules: the grid, the active figure,
//! line clears, figure generation and the accelerating descent timer. It has
//! no terminal or I/O dependencies beyond reading a config file.
//!
//! # Module Structure
//!
//! - [`catalog`]: immutable shape/color table, one record per figure kind
//! - [`cell`]: a grid position and its content id
//! - [`grid`]: the static playfield with row compaction
//! - [`figure`]: the movable, rotatable shape and its collision checks
//! - [`timer`]: the descent timer
//! - [`field`]: the state machine tying everything together
//! - [`events`]: typed notifications and the observer trait
//! - [`scoring`]: the row-clear scoreboard
//! - [`config`]: validated game configuration
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::{Field, GameStatus, Scoreboard};
//! use tui_blockfall_types::Action;
//!
//! let mut field = Field::with_seed(12345);
//! field.start_descent();
//! assert_eq!(field.status(), GameStatus::Playing);
//!
//! field.apply_action(Action::Left);
//! field.apply_action(Action::Rotate);
//! field.tick(1000);
//!
//! let mut scoreboard = Scoreboard::default();
//! field.dispatch(&mut scoreboard);
//! assert_eq!(scoreboard.score(), 0);
//! ```

pub mod catalog;
pub mod cell;
pub mod config;
pub mod events;
pub mod field;
pub mod figure;
pub mod grid;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod timer;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, ShapeDef};
pub use cell::Cell;
pub use config::{ConfigError, GameConfig};
pub use events::{EventLog, FieldEvent, FieldObserver};
pub use field::{Field, GameStatus};
pub use figure::{rotate_matrix, Figure};
pub use grid::Grid;
pub use rng::{FigureGenerator, SimpleRng};
pub use scoring::Scoreboard;
pub use snapshot::FieldSnapshot;
pub use timer::{DescentTimer, TimerState};
