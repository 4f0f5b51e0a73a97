//! Terminal presentation for the falling-block game.
//!
//! Rendering goes through a small framebuffer instead of a widget toolkit:
//! [`GameView`] draws a field snapshot into a [`FrameBuffer`] and
//! [`TerminalRenderer`] flushes only the glyphs that changed.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{named_to_rgb, AnchorY, GameView, Hud, Viewport, ViewState};
pub use renderer::{dirty_runs, encode_diff_into, encode_full_into, DirtyRun, TerminalRenderer};
