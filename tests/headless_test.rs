//! Headless replay driver.

use mini_tetris::core::{GameState, ScriptedPieces};
use mini_tetris::headless::{parse_headless_args, parse_script, run};
use mini_tetris::types::{Phase, PieceKind};

fn replay(kind: PieceKind, script: &str) -> (Vec<serde_json::Value>, mini_tetris::core::GameSnapshot) {
    let steps = parse_script(script).unwrap();
    let mut out = Vec::new();
    let last = run(
        GameState::with_source(ScriptedPieces::repeat(kind)),
        800,
        &steps,
        &mut out,
    )
    .unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    (lines, last)
}

#[test]
fn emits_initial_line_plus_one_per_step() {
    let (lines, last) = replay(PieceKind::I, "SLLH");
    assert_eq!(lines.len(), 5);

    assert_eq!(lines[0]["step"], 0);
    assert!(lines[0].get("input").is_none());
    assert_eq!(lines[0]["snapshot"]["phase"], "not_started");

    assert_eq!(lines[1]["input"], "S");
    assert_eq!(lines[1]["snapshot"]["phase"], "running");
    assert_eq!(lines[3]["snapshot"]["active"]["x"], 1);
    assert_eq!(lines[4]["snapshot"]["score"], 10);
    assert_eq!(last.score, 10);
    assert_eq!(last.board[11][1], 1);
}

#[test]
fn ticks_apply_gravity() {
    let (lines, last) = replay(PieceKind::O, "STTT");
    assert_eq!(lines[4]["snapshot"]["active"]["y"], 3);
    assert_eq!(lines[4]["changed"], true);
    assert_eq!(last.phase, Phase::Running);
}

#[test]
fn ticks_before_start_change_nothing() {
    let (lines, _) = replay(PieceKind::O, "TT");
    assert_eq!(lines[1]["changed"], false);
    assert_eq!(lines[2]["snapshot"]["phase"], "not_started");
}

#[test]
fn rejected_moves_report_unchanged() {
    let (lines, _) = replay(PieceKind::I, "SRRR");
    assert_eq!(lines[2]["changed"], true);
    assert_eq!(lines[3]["changed"], false);
    assert_eq!(lines[4]["snapshot"]["active"]["x"], 4);
}

#[test]
fn same_seed_same_output() {
    let args: Vec<String> = ["headless", "--seed", "31", "--actions", "SHHHRH", "--ticks", "4"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let cfg = parse_headless_args(&args).unwrap().unwrap();
    let seed = cfg.seed.unwrap();

    let mut a = Vec::new();
    let mut b = Vec::new();
    run(GameState::new(seed), 800, &cfg.steps, &mut a).unwrap();
    run(GameState::new(seed), 800, &cfg.steps, &mut b).unwrap();
    assert_eq!(a, b);
    assert_eq!(String::from_utf8(a).unwrap().lines().count(), 11);
}

#[test]
fn settles_are_reported_on_their_step() {
    let (lines, _) = replay(PieceKind::I, "SHL");
    assert!(lines[1].get("settled").is_none());

    let settled = lines[2]["settled"].as_array().unwrap();
    assert_eq!(settled.len(), 1);
    assert_eq!(settled[0]["kind"], "i");
    assert_eq!(settled[0]["points"], 10);
    assert_eq!(settled[0]["game_over"], false);

    assert!(lines[3].get("settled").is_none());
}
