//! Falling-block puzzle game for the terminal (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tui_blockfall::{core, input, term, types}`.

pub use tui_blockfall_core as core;
pub use tui_blockfall_input as input;
pub use tui_blockfall_term as term;
pub use tui_blockfall_types as types;
