//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the puzzle rules, state management, and simulation logic.
//! It has **no dependencies** on terminals, timers, or I/O, making it:
//!
//! - **Deterministic**: the same piece source produces the same game
//! - **Testable**: every rule is reachable without a UI
//! - **Portable**: the same state can be driven by a terminal or headless
//!
//! # Module Structure
//!
//! - [`board`]: 8x12 grid with collision detection and line clearing
//! - [`game_state`]: phases, active piece, settle sequence and scoring
//! - [`pieces`]: the four fixed shape templates
//! - [`rng`]: injectable piece sources (seeded uniform, scripted)
//! - [`snapshot`]: read-only render view
//!
//! # Game Rules
//!
//! - Four piece kinds (I, O, T, L), no rotation, picked uniformly at random
//! - Pieces spawn at (3, 0); rows above the board never collide
//! - A blocked downward step settles the piece, clears full rows and scores
//!   `10 + 100 * rows`
//! - A spawn that does not fit ends the game
//!
//! # Example
//!
//! ```
//! use mini_tetris_core::GameState;
//! use mini_tetris_types::{GameAction, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.apply_action(GameAction::Start);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.phase(), Phase::Running);
//! assert_eq!(game.score(), 10);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use mini_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{can_place, settle_points, GameState, Piece, Position, SettleEvent};
pub use pieces::{get_shape, Shape};
pub use rng::{PieceSource, RandomPieces, ScriptedPieces, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
