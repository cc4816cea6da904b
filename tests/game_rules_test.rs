//! End-to-end game rules over the public `GameState` API.

use mini_tetris::core::{can_place, Board, GameState, Piece, PieceSource, Position, RandomPieces, ScriptedPieces};
use mini_tetris::types::{Direction, GameAction, Phase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn running(kind: PieceKind, board: Board) -> GameState<ScriptedPieces> {
    let mut gs = GameState::with_board(ScriptedPieces::repeat(kind), board);
    assert!(gs.start());
    gs
}

#[test]
fn new_game_waits_for_start() {
    let mut gs = GameState::new(7);
    assert_eq!(gs.phase(), Phase::NotStarted);
    assert!(gs.active().is_none());

    for action in [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::HardDrop,
        GameAction::Pause,
    ] {
        assert!(!gs.apply_action(action), "{:?}", action);
    }
    assert_eq!(gs.phase(), Phase::NotStarted);
    assert!(gs.snapshot().active.is_none());

    assert!(gs.apply_action(GameAction::Start));
    assert_eq!(gs.phase(), Phase::Running);
    let active = gs.active().expect("piece after start");
    assert_eq!((active.x, active.y), (3, 0));

    // Start only works once.
    assert!(!gs.apply_action(GameAction::Start));
}

#[test]
fn sideways_moves_stop_at_walls() {
    let mut gs = running(PieceKind::I, Board::new());

    for _ in 0..3 {
        assert!(gs.move_sideways(Direction::Left));
    }
    assert!(!gs.move_sideways(Direction::Left));
    assert_eq!(gs.active().map(|p| p.x), Some(0));

    for _ in 0..4 {
        assert!(gs.move_sideways(Direction::Right));
    }
    assert!(!gs.move_sideways(Direction::Right));
    // I is four wide, so its anchor stops at column 4.
    assert_eq!(gs.active().map(|p| p.x), Some(4));
    assert_eq!(gs.board().settled_count(), 0);
}

#[test]
fn soft_drop_walks_down_then_settles() {
    let mut gs = running(PieceKind::I, Board::new());

    for row in 1..BOARD_HEIGHT as i8 {
        assert!(gs.apply_action(GameAction::SoftDrop));
        assert_eq!(gs.active().map(|p| p.y), Some(row));
    }
    assert_eq!(gs.board().settled_count(), 0);

    assert!(gs.apply_action(GameAction::SoftDrop));
    assert_eq!(gs.board().settled_count(), 4);
    for x in 3..7 {
        assert!(gs.board().is_settled(x, 11));
    }
    assert_eq!(gs.score(), 10);
    assert_eq!(gs.active().map(|p| p.y), Some(0));
}

#[test]
fn hard_drop_lands_on_the_floor() {
    let mut gs = running(PieceKind::T, Board::new());
    assert!(gs.hard_drop());

    let b = gs.board();
    assert!(b.is_settled(4, 10));
    assert!(b.is_settled(3, 11));
    assert!(b.is_settled(4, 11));
    assert!(b.is_settled(5, 11));
    assert_eq!(b.settled_count(), 4);

    let ev = gs.take_last_event().expect("settle event");
    assert_eq!(ev.kind, PieceKind::T);
    assert_eq!(ev.lines_cleared, 0);
    assert_eq!(ev.points, 10);
    assert!(!ev.game_over);
}

#[test]
fn hard_drop_rests_on_settled_cells() {
    let board = Board::from_rows(&["...#....", "...#...."]);
    let mut gs = running(PieceKind::O, board);
    gs.hard_drop();
    assert!(gs.board().is_settled(3, 8));
    assert!(gs.board().is_settled(4, 9));
    assert!(!gs.board().is_settled(4, 11));
}

#[test]
fn single_line_clear_scores_110() {
    let board = Board::from_rows(&["###....#"]);
    let mut gs = running(PieceKind::I, board);
    gs.hard_drop();

    assert_eq!(gs.score(), 110);
    assert_eq!(gs.lines(), 1);
    assert!(gs.board().is_empty());
}

#[test]
fn double_line_clear_scores_210_and_shifts_rows() {
    let board = Board::from_rows(&["#.......", "###..###", "###..###"]);
    let mut gs = running(PieceKind::O, board);
    gs.hard_drop();

    assert_eq!(gs.score(), 210);
    assert_eq!(gs.lines(), 2);
    // The lone cell above the cleared rows falls to the floor.
    assert!(gs.board().is_settled(0, 11));
    assert_eq!(gs.board().settled_count(), 1);
}

#[test]
fn score_accumulates_per_settle() {
    let mut gs = running(PieceKind::O, Board::new());
    for settled in 1..=3u32 {
        gs.hard_drop();
        assert_eq!(gs.score(), settled * 10);
        assert_eq!(gs.pieces_settled(), settled);
    }
}

#[test]
fn blocked_spawn_ends_the_game() {
    // A column under the spawn area leaves exactly two free rows.
    let rows = ["...##..."; 10];
    let mut gs = running(PieceKind::O, Board::from_rows(&rows));
    assert_eq!(gs.phase(), Phase::Running);

    assert!(gs.hard_drop());
    assert_eq!(gs.phase(), Phase::GameOver);
    assert!(gs.active().is_none());
    assert_eq!(gs.score(), 10);
    assert!(gs.take_last_event().map(|e| e.game_over).unwrap_or(false));

    // The settled O is merged on top of the column; the rejected spawn is not.
    let board = gs.board().clone();
    assert_eq!(board.settled_count(), 24);
    for y in 0..2 {
        assert!(board.is_settled(3, y));
        assert!(board.is_settled(4, y));
    }
    let frozen = gs.snapshot();
    assert!(frozen.board.iter().flatten().all(|&v| v != 2));

    // Nothing but restart does anything now.
    assert!(!gs.apply_action(GameAction::MoveLeft));
    assert!(!gs.apply_action(GameAction::MoveRight));
    assert!(!gs.apply_action(GameAction::SoftDrop));
    assert!(!gs.apply_action(GameAction::HardDrop));
    assert!(!gs.apply_action(GameAction::Pause));
    assert!(!gs.apply_action(GameAction::Start));
    for _ in 0..5 {
        assert!(!gs.tick());
    }
    assert_eq!(gs.board(), &board);
    assert_eq!(gs.snapshot(), frozen);
    assert!(gs.take_last_event().is_none());
}

#[test]
fn game_over_after_settle_keeps_cleared_grid() {
    // The I settles on row 0 and completes it; the row clears, and the O
    // that follows cannot fit over the stack below.
    let mut rows = ["...####."; 12];
    rows[0] = "###....#";
    let mut gs = GameState::with_board(
        ScriptedPieces::new([PieceKind::I, PieceKind::O]),
        Board::from_rows(&rows),
    );
    assert!(gs.start());
    assert_eq!(gs.phase(), Phase::Running);

    assert!(gs.hard_drop());
    assert_eq!(gs.phase(), Phase::GameOver);
    assert_eq!(gs.lines(), 1);
    assert_eq!(gs.score(), 110);

    let expected = Board::from_rows(&["...####."; 11]);
    assert_eq!(gs.board(), &expected);

    assert!(!gs.tick());
    assert!(!gs.hard_drop());
    assert_eq!(gs.board(), &expected);
}

#[test]
fn top_rows_filled_except_spawn_column_is_game_over() {
    let mut rows = ["........"; 12];
    rows[0] = "###.####";
    rows[1] = "###.####";
    let board = Board::from_rows(&rows);
    let before = board.clone();

    // O needs the spawn column plus the one to its right.
    let mut gs = GameState::with_board(ScriptedPieces::repeat(PieceKind::O), board);
    assert!(gs.start());
    assert_eq!(gs.phase(), Phase::GameOver);
    assert!(gs.active().is_none());
    assert_eq!(gs.board(), &before);
    assert_eq!(gs.score(), 0);

    assert!(!gs.tick());
    assert!(!gs.hard_drop());
    assert_eq!(gs.board(), &before);

    assert!(gs.apply_action(GameAction::Restart));
    assert_eq!(gs.phase(), Phase::Running);
    assert!(gs.board().is_empty());
}

#[test]
fn start_on_a_full_spawn_area_is_game_over() {
    let board = Board::from_rows(&[
        "...#....", "...#....", "...#....", "...#....", "...#....", "...#....",
        "...#....", "...#....", "...#....", "...#....", "...#....", "...#....",
    ]);
    let mut gs = GameState::with_board(ScriptedPieces::repeat(PieceKind::I), board);
    assert!(gs.start());
    assert_eq!(gs.phase(), Phase::GameOver);
    assert!(gs.snapshot().active.is_none());
}

#[test]
fn pause_freezes_everything() {
    let mut gs = running(PieceKind::T, Board::new());
    let before = gs.active();

    assert!(gs.toggle_pause());
    assert_eq!(gs.phase(), Phase::Paused);
    assert!(!gs.move_sideways(Direction::Left));
    assert!(!gs.tick());
    assert!(!gs.hard_drop());
    assert_eq!(gs.active(), before);
    // Paused games still show their piece.
    assert!(gs.snapshot().active.is_some());

    assert!(gs.toggle_pause());
    assert_eq!(gs.phase(), Phase::Running);
    assert!(gs.tick());
}

#[test]
fn restart_works_from_every_phase() {
    let mut gs = GameState::with_source(ScriptedPieces::repeat(PieceKind::O));
    gs.restart();
    assert_eq!(gs.phase(), Phase::Running);
    assert_eq!(gs.episode_id(), 1);

    gs.hard_drop();
    gs.toggle_pause();
    gs.restart();
    assert_eq!(gs.phase(), Phase::Running);
    assert_eq!(gs.score(), 0);
    assert!(gs.board().is_empty());
    assert_eq!(gs.episode_id(), 2);

    let mut over = running(PieceKind::O, Board::from_rows(&["...##..."; 10]));
    over.hard_drop();
    assert_eq!(over.phase(), Phase::GameOver);
    assert!(over.apply_action(GameAction::Restart));
    assert_eq!(over.phase(), Phase::Running);
    assert!(over.board().is_empty());
    assert_eq!(over.score(), 0);
    assert_eq!(over.lines(), 0);
}

#[test]
fn can_place_allows_negative_rows_only() {
    let board = Board::new();
    let piece = Piece::new(PieceKind::L);
    assert!(can_place(&board, &piece, Position::new(3, -2)));
    assert!(!can_place(&board, &piece, Position::new(-1, -2)));
    assert!(!can_place(&board, &piece, Position::new(BOARD_WIDTH as i8 - 1, 0)));
    assert!(!can_place(&board, &piece, Position::new(3, 10)));
    assert!(can_place(&board, &piece, Position::new(3, 9)));
}

#[test]
fn same_seed_same_pieces() {
    let mut a = RandomPieces::new(2024);
    let mut b = RandomPieces::new(2024);
    let seq_a: Vec<PieceKind> = (0..50).map(|_| a.next_kind()).collect();
    let seq_b: Vec<PieceKind> = (0..50).map(|_| b.next_kind()).collect();
    assert_eq!(seq_a, seq_b);
    for kind in PieceKind::ALL {
        assert!(seq_a.contains(&kind), "{:?} never drawn", kind);
    }
}

#[test]
fn settled_cells_never_overlap_active_piece() {
    let mut gs = GameState::new(99);
    gs.start();
    for i in 0..200 {
        let action = match i % 5 {
            0 => GameAction::MoveLeft,
            1 => GameAction::SoftDrop,
            2 => GameAction::MoveRight,
            3 => GameAction::MoveRight,
            _ => GameAction::HardDrop,
        };
        gs.apply_action(action);
        if gs.phase() == Phase::GameOver {
            gs.restart();
        }
        if let Some(p) = gs.active() {
            for (x, y) in p.cells() {
                assert!((0..BOARD_WIDTH as i8).contains(&x));
                assert!(y < BOARD_HEIGHT as i8);
                assert!(!gs.board().is_settled(x, y));
            }
        }
        for y in 0..BOARD_HEIGHT as usize {
            assert!(!gs.board().is_row_full(y));
        }
    }
}
