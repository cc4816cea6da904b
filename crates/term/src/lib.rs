//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids
//! widget toolkits and renders into a simple framebuffer that is flushed to
//! the terminal as a diff against the previous frame.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render from the read-only [`core::GameSnapshot`] only
//! - Lay the HUD out in the reading direction of the active locale

pub mod fb;
pub mod game_view;
pub mod labels;
pub mod renderer;

pub use mini_tetris_core as core;
pub use mini_tetris_types as types;

pub use fb::{display_width, is_zero_width, Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use labels::Labels;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer, TerminalSession};
