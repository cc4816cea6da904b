//! Controller: the single owner of a game and its gravity timer.
//!
//! Every mutation goes through here so the timer can follow the phase: it is
//! armed exactly while the game runs. Dropping the controller drops the timer
//! with it.

use std::time::Duration;

use mini_tetris_core::{GameSnapshot, GameState, PieceSource, RandomPieces, SettleEvent};
use mini_tetris_types::{GameAction, Phase, DROP_INTERVAL_MS, IDLE_POLL_MS};
use tracing::{debug, info};

use crate::timer::GravityTimer;

pub struct Controller<S = RandomPieces> {
    state: GameState<S>,
    timer: GravityTimer,
    /// Settle events since the last `drain_events`; `None` unless recording.
    events: Option<Vec<SettleEvent>>,
}

impl Controller<RandomPieces> {
    /// Controller for a random game with the default 800ms gravity.
    pub fn new(seed: u32) -> Self {
        Self::with_state(GameState::new(seed), DROP_INTERVAL_MS)
    }
}

impl<S: PieceSource> Controller<S> {
    pub fn with_state(state: GameState<S>, drop_interval_ms: u32) -> Self {
        let mut controller = Self {
            state,
            timer: GravityTimer::new(drop_interval_ms),
            events: None,
        };
        controller.sync_timer();
        controller
    }

    /// Keep settle events for `drain_events`.
    pub fn record_events(mut self) -> Self {
        self.events = Some(Vec::new());
        self
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn timer(&self) -> &GravityTimer {
        &self.timer
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.state.snapshot_into(out);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Apply one player action.
    pub fn handle(&mut self, action: GameAction) -> bool {
        let before = self.state.phase();
        let changed = self.state.apply_action(action);
        if changed {
            debug!(action = action.as_str(), "action applied");
        }
        if action == GameAction::Restart {
            // A fresh game gets a fresh interval.
            self.timer.disarm();
        }
        self.after_mutation(before);
        changed
    }

    /// One turn of the input loop: account for the time that passed, then
    /// apply the input that arrived at the end of it.
    ///
    /// Time spent before a start, resume or restart never counts against the
    /// interval that action arms.
    pub fn step(&mut self, elapsed_ms: u32, action: Option<GameAction>) -> bool {
        let fired = self.advance(elapsed_ms);
        let handled = action.map(|a| self.handle(a)).unwrap_or(false);
        fired > 0 || handled
    }

    /// Feed wall-clock time; runs one gravity step per fired interval.
    ///
    /// Returns the number of steps taken.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        let fired = self.timer.advance(elapsed_ms);
        let mut steps = 0;
        for _ in 0..fired {
            // A settle inside this batch may have ended the game.
            if self.state.phase() != Phase::Running {
                break;
            }
            let before = self.state.phase();
            self.state.tick();
            steps += 1;
            self.after_mutation(before);
        }
        steps
    }

    /// How long the input loop may block before the next gravity step.
    pub fn poll_timeout(&self) -> Duration {
        self.timer
            .remaining()
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS as u64))
    }

    /// Take settle events recorded since the last call.
    ///
    /// Always empty unless built with `record_events`.
    pub fn drain_events(&mut self) -> Vec<SettleEvent> {
        self.events.as_mut().map(std::mem::take).unwrap_or_default()
    }

    fn after_mutation(&mut self, before: Phase) {
        if let Some(ev) = self.state.take_last_event() {
            debug!(
                kind = ev.kind.as_str(),
                lines = ev.lines_cleared,
                points = ev.points,
                score = self.state.score(),
                "piece settled"
            );
            if let Some(events) = self.events.as_mut() {
                events.push(ev);
            }
        }

        let after = self.state.phase();
        if after != before {
            info!(
                from = before.as_str(),
                to = after.as_str(),
                score = self.state.score(),
                "phase changed"
            );
        }
        self.sync_timer();
    }

    fn sync_timer(&mut self) {
        let running = self.state.phase() == Phase::Running;
        if self.timer.set_armed(running) {
            debug!(armed = running, "gravity timer");
        }
    }
}
