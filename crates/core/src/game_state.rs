//! Game state module - manages the complete game state
//!
//! Ties together the board, the active piece, the piece source and scoring.
//! Every operation is a synchronous state transition. Requests that are not
//! allowed in the current phase, or that would collide, are ignored rather
//! than reported as errors.

use serde::Serialize;

use crate::board::Board;
use crate::pieces::{get_shape, Shape};
use crate::rng::{PieceSource, RandomPieces};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Top-left anchor of a piece in board coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    pub const SPAWN: Position = Position {
        x: SPAWN_X,
        y: SPAWN_Y,
    };

    pub fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a new piece at the spawn position
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn shape(&self) -> &'static Shape {
        get_shape(self.kind)
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn at(self, pos: Position) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            ..self
        }
    }

    /// Absolute board coordinates of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape()
            .minos()
            .iter()
            .map(move |&(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Whether `piece` could occupy `at` on `board`.
///
/// Pure predicate: columns must stay inside the board, rows must stay above the
/// floor, and visible cells must not overlap settled ones. Rows above the board
/// never collide.
pub fn can_place(board: &Board, piece: &Piece, at: Position) -> bool {
    board.fits(piece.shape(), at.x, at.y)
}

/// Outcome of one settle sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SettleEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub points: u32,
    pub game_over: bool,
}

/// Points for a settle that cleared `lines` rows
pub fn settle_points(lines: u32) -> u32 {
    lines * LINE_CLEAR_POINTS + SETTLE_BONUS
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = RandomPieces> {
    board: Board,
    active: Option<Piece>,
    source: S,
    phase: Phase,
    score: u32,
    lines: u32,
    /// Settles since the last (re)start.
    pieces_settled: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Last settle event (consumed by observers).
    last_event: Option<SettleEvent>,
}

impl GameState<RandomPieces> {
    /// Create a new game with uniformly random pieces from the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(RandomPieces::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game drawing pieces from `source`
    pub fn with_source(source: S) -> Self {
        Self {
            board: Board::new(),
            active: None,
            source,
            phase: Phase::NotStarted,
            score: 0,
            lines: 0,
            pieces_settled: 0,
            episode_id: 0,
            last_event: None,
        }
    }

    /// Like `with_source`, but starting from a prepared board.
    ///
    /// Useful for puzzles and tests; the phase is still `NotStarted`.
    pub fn with_board(source: S, board: Board) -> Self {
        let mut state = Self::with_source(source);
        state.board = board;
        state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn pieces_settled(&self) -> u32 {
        self.pieces_settled
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Start a game that has not started yet.
    ///
    /// Keeps whatever board the state was built with.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.phase = Phase::Running;
        self.accept_spawn();
        true
    }

    /// Reset grid, score and piece, then run. Works from any phase.
    pub fn restart(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.pieces_settled = 0;
        self.last_event = None;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = Phase::Running;
        self.accept_spawn();
    }

    /// Draw the next kind and place it at the spawn anchor.
    ///
    /// Placement is not validated here; see `settle` for the game-over check.
    pub fn spawn_piece(&mut self) -> Piece {
        Piece::new(self.source.next_kind())
    }

    /// Spawn and accept the new piece, or end the game if it does not fit.
    fn accept_spawn(&mut self) -> bool {
        let piece = self.spawn_piece();
        if can_place(&self.board, &piece, piece.position()) {
            self.active = Some(piece);
            true
        } else {
            self.active = None;
            self.phase = Phase::GameOver;
            false
        }
    }

    fn running_piece(&self) -> Option<Piece> {
        if self.phase != Phase::Running {
            return None;
        }
        self.active
    }

    /// Try to shift the active piece; commits only when it fits.
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.running_piece() else {
            return false;
        };

        let target = active.position().offset(dx, dy);
        if can_place(&self.board, &active, target) {
            self.active = Some(active.at(target));
            return true;
        }

        false
    }

    /// Move the active piece one column; never settles.
    pub fn move_sideways(&mut self, direction: Direction) -> bool {
        self.try_move(direction.dx(), 0)
    }

    /// Gravity step: move down one row, or settle when blocked.
    pub fn tick(&mut self) -> bool {
        if self.running_piece().is_none() {
            return false;
        }
        if !self.try_move(0, 1) {
            self.settle();
        }
        true
    }

    /// Drop to the deepest valid row and settle there.
    pub fn hard_drop(&mut self) -> bool {
        let Some(active) = self.running_piece() else {
            return false;
        };

        let mut target = active.position();
        while can_place(&self.board, &active, target.offset(0, 1)) {
            target = target.offset(0, 1);
        }

        self.active = Some(active.at(target));
        self.settle();
        true
    }

    /// Flip between running and paused.
    pub fn toggle_pause(&mut self) -> bool {
        self.phase = match self.phase {
            Phase::Running => Phase::Paused,
            Phase::Paused => Phase::Running,
            Phase::NotStarted | Phase::GameOver => return false,
        };
        true
    }

    /// Merge the active piece, clear lines, score, and spawn the next piece.
    fn settle(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        self.board.merge(active.shape(), active.x, active.y);

        let lines_cleared = self.board.clear_full_rows().len() as u32;
        let points = settle_points(lines_cleared);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines_cleared);
        self.pieces_settled = self.pieces_settled.wrapping_add(1);

        let spawned = self.accept_spawn();

        self.last_event = Some(SettleEvent {
            kind: active.kind,
            lines_cleared,
            points,
            game_over: !spawned,
        });
    }

    /// Take and clear the last settle event.
    pub fn take_last_event(&mut self) -> Option<SettleEvent> {
        self.last_event.take()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_sideways(Direction::Left),
            GameAction::MoveRight => self.move_sideways(Direction::Right),
            GameAction::SoftDrop => self.tick(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => self.start(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Fill `out` with the render view of this state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_marker_grid(&mut out.board);

        out.active = None;
        if self.phase.shows_active() {
            if let Some(active) = self.active {
                for (x, y) in active.cells() {
                    if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                        out.board[y as usize][x as usize] = Cell::Falling.marker();
                    }
                }
                out.active = Some(ActiveSnapshot::from(active));
            }
        }

        out.phase = self.phase;
        out.score = self.score;
        out.lines = self.lines;
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState<RandomPieces> {
    fn default() -> Self {
        Self::new(1)
    }
}
