//! Terminal input module.
//!
//! Maps `crossterm` key events onto the fixed [`crate::types::Action`]
//! vocabulary. The table is not configurable. Session controls (pause, quit,
//! restart) are reported separately since they belong to the runner, not to
//! the field.

pub mod map;

pub use tui_blockfall_types as types;

pub use map::{control_for_key, handle_key_event, should_quit, Control, KEY_BINDINGS};
