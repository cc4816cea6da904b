//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The mapping
//! is locale-aware: right-to-left layouts mirror the horizontal arrow keys so
//! that "toward the HUD" stays on the same physical key.

pub mod map;

pub use mini_tetris_types as types;

pub use map::{handle_key_event, should_quit};
