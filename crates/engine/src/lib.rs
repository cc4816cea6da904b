//! Engine module - drives a game over time.
//!
//! The core crate is a pure state machine; this crate adds the gravity clock
//! and the controller that owns both. Terminal and headless front-ends talk to
//! a [`Controller`] only.

pub mod controller;
pub mod timer;

pub use mini_tetris_core as core;
pub use mini_tetris_types as types;

pub use controller::Controller;
pub use timer::GravityTimer;
