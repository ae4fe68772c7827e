//! Terminal snake runner (default binary).
//!
//! Crossterm input feeds a [`Session`]; frames are drawn through the
//! framebuffer renderer only when the state changes or the terminal resizes.

use std::fs::File;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_snake::core::GameSnapshot;
use tui_snake::engine::Session;
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::store::JsonFileStore;
use tui_snake::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_snake::AppConfig;

/// Input poll interval while no tick is scheduled (game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_logging(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(e) = &result {
        log::error!("Exiting on error: {:#}", e);
    }
    result
}

/// The screen belongs to the game, so logs only go to `SNAKE_LOG_PATH`.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("opening log {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let store = JsonFileStore::new(&config.highscore_path);
    let mut session = Session::new(config.game(), config.tick_interval, store, Instant::now());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            session.state().snapshot_into(&mut snap);
            view.render_into(&snap, Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        let timeout = session.timeout(Instant::now()).unwrap_or(IDLE_POLL);
        if event::poll(timeout)? {
            match event::read()? {
                // Auto-repeat counts too: holding a key keeps steering.
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(game_event) = handle_key_event(key) {
                        dirty |= session.dispatch(game_event, Instant::now());
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        dirty |= session.poll_tick(Instant::now());
    }
}
