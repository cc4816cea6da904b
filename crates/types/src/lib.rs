//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behavior beyond parsing and formatting,
//! so they can be shared by the simulation, the controller and the terminal
//! front-end alike.
//!
//! # Board Dimensions
//!
//! The widget uses a small playfield:
//!
//! - **Width**: 8 columns (indexed 0-7)
//! - **Height**: 12 rows (indexed 0-11)
//! - **Spawn position**: (3, 0) for every piece
//!
//! # Timing and Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 800 | Gravity period while running |
//! | `IDLE_POLL_MS` | 250 | Input wait while gravity is disarmed |
//! | `SETTLE_BONUS` | 10 | Points for every settled piece |
//! | `LINE_CLEAR_POINTS` | 100 | Points per cleared row |
//!
//! # Examples
//!
//! ```
//! use mini_tetris_types::{GameAction, Locale, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert!(Locale::Ar.is_rtl());
//!
//! assert_eq!(BOARD_WIDTH, 8);
//! assert_eq!(BOARD_HEIGHT, 12);
//! ```

use serde::Serialize;

/// Board width in cells (8 columns)
pub const BOARD_WIDTH: u8 = 8;

/// Board height in cells (12 rows)
pub const BOARD_HEIGHT: u8 = 12;

/// Spawn column for the top-left anchor of a new piece
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Spawn row for the top-left anchor of a new piece
pub const SPAWN_Y: i8 = 0;

/// Gravity interval while the game is running (800ms per row)
pub const DROP_INTERVAL_MS: u32 = 800;

/// How long the terminal loop waits for input when no timer is armed
pub const IDLE_POLL_MS: u32 = 250;

/// Points awarded for every settled piece
pub const SETTLE_BONUS: u32 = 10;

/// Points awarded per cleared row
pub const LINE_CLEAR_POINTS: u32 = 100;


/// The four piece kinds of the widget catalog
///
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **L**: Orange, L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind in catalog order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use mini_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("L"), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_str("s"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
        }
    }
}

/// A cell of the playfield as seen by a renderer
///
/// The board itself only stores `Empty` and `Settled`. `Falling` marks cells of
/// the active piece when it is overlaid onto a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Settled,
    Falling,
}

impl Cell {
    /// Numeric marker used in snapshots: 0 empty, 1 settled, 2 falling.
    pub fn marker(self) -> u8 {
        match self {
            Cell::Empty => 0,
            Cell::Settled => 1,
            Cell::Falling => 2,
        }
    }

    pub fn from_marker(v: u8) -> Option<Self> {
        match v {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Settled),
            2 => Some(Cell::Falling),
            _ => None,
        }
    }
}

/// Game lifecycle phase
///
/// `NotStarted -> Running` on start, `Running <-> Paused` on pause,
/// `Running -> GameOver` when a spawn is rejected. Restart always lands in `Running`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    NotStarted,
    Running,
    Paused,
    GameOver,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not_started",
            Phase::Running => "running",
            Phase::Paused => "paused",
            Phase::GameOver => "game_over",
        }
    }

    /// Whether the active piece should be drawn.
    pub fn shows_active(&self) -> bool {
        matches!(self, Phase::Running | Phase::Paused)
    }
}

/// Horizontal movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Column delta for one step.
    pub fn dx(self) -> i8 {
        match self {
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    /// The opposite direction (used for right-to-left layouts).
    pub fn mirrored(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Each action maps to exactly one simulation operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Advance piece one row (settles when blocked)
    SoftDrop,
    /// Drop piece to lowest valid row and settle
    HardDrop,
    /// Toggle pause state
    Pause,
    /// Start a game that has not started yet
    Start,
    /// Reset everything and start over, from any phase
    Restart,
}

impl GameAction {
    pub const ALL: [GameAction; 7] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Pause,
        GameAction::Start,
        GameAction::Restart,
    ];

    /// Parse action from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use mini_tetris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("softdrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("rotateCw"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "pause" => Some(GameAction::Pause),
            "start" => Some(GameAction::Start),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Pause => "pause",
            GameAction::Start => "start",
            GameAction::Restart => "restart",
        }
    }
}

/// UI locale
///
/// Arabic is laid out right-to-left: the HUD moves to the left of the board and
/// the arrow keys are mirrored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ar" => Some(Locale::Ar),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Locale::Ar)
    }
}
