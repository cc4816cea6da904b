//! Mini Tetris runner (default binary).
//!
//! `mini-tetris` plays interactively in the terminal.
//! `mini-tetris headless ...` replays a scripted game and prints JSON snapshots.

use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use mini_tetris::config::Config;
use mini_tetris::core::{GameSnapshot, GameState};
use mini_tetris::engine::Controller;
use mini_tetris::headless::{self, HeadlessConfig};
use mini_tetris::input::{handle_key_event, should_quit};
use mini_tetris::logging;
use mini_tetris::term::{FrameBuffer, GameView, TerminalRenderer, TerminalSession, Viewport};

fn main() -> Result<()> {
    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Some(run) = headless::parse_headless_args(&args)? {
        return run_headless(&config, run);
    }
    if let Some(arg) = args.first() {
        anyhow::bail!("unknown argument: {} (expected no arguments or `headless`)", arg);
    }

    let _guard = logging::init_file(&config)?;
    tracing::info!(
        seed = config.seed,
        drop_ms = config.drop_interval_ms,
        locale = config.locale.as_str(),
        "starting interactive game"
    );

    let session = TerminalSession::enter()?;
    let result = run_interactive(&config);
    // Restore the terminal before reporting any error.
    session.exit()?;
    result
}

fn run_headless(config: &Config, run: HeadlessConfig) -> Result<()> {
    logging::init_stderr(config)?;
    let seed = run.seed.unwrap_or(config.seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    headless::run(
        GameState::new(seed),
        config.drop_interval_ms,
        &run.steps,
        &mut out,
    )?;
    Ok(())
}

fn run_interactive(config: &Config) -> Result<()> {
    let mut controller = Controller::with_state(GameState::new(config.seed), config.drop_interval_ms);
    let view = GameView::default();
    let mut renderer = TerminalRenderer::new();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_drawn: Option<(u64, Viewport)> = None;
    let mut last_clock = Instant::now();

    loop {
        controller.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        let key = (snap.fingerprint(), viewport);
        if last_drawn != Some(key) {
            view.render_into(&snap, config.locale, viewport, &mut fb);
            renderer.draw(&fb)?;
            last_drawn = Some(key);
        }

        let mut action = None;
        if event::poll(controller.poll_timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        tracing::info!(score = controller.state().score(), "quit");
                        return Ok(());
                    }
                    action = handle_key_event(key, config.locale);
                }
                Event::Resize(_, _) => {
                    renderer.invalidate();
                    last_drawn = None;
                }
                _ => {}
            }
        }

        // Gravity catches up to the moment the key arrived, then the key applies.
        let now = Instant::now();
        let elapsed = now.duration_since(last_clock).as_millis();
        last_clock = now;
        controller.step(u32::try_from(elapsed).unwrap_or(u32::MAX), action);
    }
}
