//! Terminal 2048 runner (default binary).
//!
//! Reads configuration from the environment, then loops: present the current
//! snapshot, block for the next key, apply it. There is no tick; the board only
//! changes in response to input.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tui_2048::core::{GameConfig, GameSnapshot, GameState};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{Presenter, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_logging(&config)?;

    let mut game = GameState::with_config(&config)
        .with_context(|| format!("cannot start a game with board size {}", config.size))?;
    info!(size = game.size(), seed = game.seed(), "starting");

    let mut presenter = Presenter::default();
    presenter.enter()?;

    let result = run(&mut presenter, &mut game);

    // Always try to restore terminal state.
    let _ = presenter.exit();
    info!(score = game.score(), best = game.best(), "exiting");
    result
}

/// Install a file logger when `TUI_2048_LOG_PATH` is set.
///
/// The terminal is in raw mode on the alternate screen, so logs never go to
/// stdout or stderr.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn run(presenter: &mut Presenter, game: &mut GameState) -> Result<()> {
    let mut snapshot = GameSnapshot::default();

    loop {
        game.snapshot_into(&mut snapshot);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        presenter.present(&snapshot, Viewport::new(w, h))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    game.apply_action(action);
                }
            }
            Event::Resize(_, _) => presenter.invalidate(),
            _ => {}
        }
    }
}
