//! Mini Tetris (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as
//! `mini_tetris::{core,engine,input,term,types}` and hosts the binary's
//! configuration, logging and headless driver.

pub use mini_tetris_core as core;
pub use mini_tetris_engine as engine;
pub use mini_tetris_input as input;
pub use mini_tetris_term as term;
pub use mini_tetris_types as types;

pub mod config;
pub mod headless;
pub mod logging;
