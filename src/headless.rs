//! Headless driver: replay a scripted input sequence and print snapshots.
//!
//! ```text
//! mini-tetris headless --seed 7 --actions "SLLHRRH" --ticks 3
//! ```
//!
//! Each line of output is one JSON object: the step index, the input letter
//! (absent for the initial state), whether the input changed anything, the
//! pieces it settled (omitted when none), and the render snapshot after it.

use std::io::Write;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{GameSnapshot, GameState, PieceSource, SettleEvent};
use crate::engine::Controller;
use crate::types::GameAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadlessConfig {
    pub seed: Option<u32>,
    pub steps: Vec<Step>,
}

/// One scripted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Action(GameAction),
    /// One full gravity interval.
    Tick,
}

impl Step {
    pub fn from_letter(ch: char) -> Option<Self> {
        let action = match ch.to_ascii_uppercase() {
            'L' => GameAction::MoveLeft,
            'R' => GameAction::MoveRight,
            'D' => GameAction::SoftDrop,
            'H' => GameAction::HardDrop,
            'P' => GameAction::Pause,
            'S' => GameAction::Start,
            'X' => GameAction::Restart,
            'T' => return Some(Step::Tick),
            _ => return None,
        };
        Some(Step::Action(action))
    }

    pub fn letter(self) -> char {
        match self {
            Step::Action(GameAction::MoveLeft) => 'L',
            Step::Action(GameAction::MoveRight) => 'R',
            Step::Action(GameAction::SoftDrop) => 'D',
            Step::Action(GameAction::HardDrop) => 'H',
            Step::Action(GameAction::Pause) => 'P',
            Step::Action(GameAction::Start) => 'S',
            Step::Action(GameAction::Restart) => 'X',
            Step::Tick => 'T',
        }
    }
}

/// Parse an action script; whitespace is ignored.
pub fn parse_script(script: &str) -> Result<Vec<Step>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .enumerate()
        .map(|(i, c)| {
            Step::from_letter(c)
                .ok_or_else(|| anyhow!("headless: unknown action '{}' at position {}", c, i))
        })
        .collect()
}

/// Returns `Ok(None)` when `args` is not a headless invocation.
pub fn parse_headless_args(args: &[String]) -> Result<Option<HeadlessConfig>> {
    if args.is_empty() || args[0] != "headless" {
        return Ok(None);
    }

    let mut seed = None;
    let mut steps = Vec::new();
    let mut ticks = 0usize;
    let mut i = 1usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("headless: missing value for --seed"))?;
                seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("headless: invalid --seed value: {}", v))?,
                );
            }
            "--actions" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("headless: missing value for --actions"))?;
                steps.extend(parse_script(v)?);
            }
            "--ticks" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("headless: missing value for --ticks"))?;
                ticks = v
                    .parse::<usize>()
                    .map_err(|_| anyhow!("headless: invalid --ticks value: {}", v))?;
            }
            other => {
                return Err(anyhow!("headless: unknown argument: {}", other));
            }
        }
        i += 1;
    }

    steps.extend(std::iter::repeat(Step::Tick).take(ticks));
    Ok(Some(HeadlessConfig { seed, steps }))
}

#[derive(Serialize)]
struct StepRecord<'a> {
    step: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<char>,
    changed: bool,
    #[serde(skip_serializing_if = "no_events")]
    settled: &'a [SettleEvent],
    snapshot: &'a GameSnapshot,
}

fn no_events(events: &&[SettleEvent]) -> bool {
    events.is_empty()
}

/// Replay `steps` and write one JSON line per step (plus the initial state).
///
/// Returns the final snapshot.
pub fn run<S: PieceSource>(
    state: GameState<S>,
    drop_interval_ms: u32,
    steps: &[Step],
    out: &mut impl Write,
) -> Result<GameSnapshot> {
    let mut controller = Controller::with_state(state, drop_interval_ms).record_events();
    let mut snap = controller.snapshot();
    write_record(out, 0, None, false, &[], &snap)?;

    for (i, step) in steps.iter().enumerate() {
        let changed = match *step {
            Step::Action(action) => controller.step(0, Some(action)),
            Step::Tick => controller.step(drop_interval_ms, None),
        };
        let settled = controller.drain_events();
        controller.snapshot_into(&mut snap);
        write_record(out, i + 1, Some(step.letter()), changed, &settled, &snap)?;
    }

    tracing::info!(
        steps = steps.len(),
        score = snap.score,
        phase = snap.phase.as_str(),
        "headless run finished"
    );
    out.flush()?;
    Ok(snap)
}

fn write_record(
    out: &mut impl Write,
    step: usize,
    input: Option<char>,
    changed: bool,
    settled: &[SettleEvent],
    snapshot: &GameSnapshot,
) -> Result<()> {
    let record = StepRecord {
        step,
        input,
        changed,
        settled,
        snapshot,
    };
    serde_json::to_writer(&mut *out, &record)?;
    out.write_all(b"\n")?;
    Ok(())
}
