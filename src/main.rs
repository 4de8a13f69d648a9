//! Terminal chess runner (default binary).
//!
//! Two local players share the mouse. It uses crossterm for input and a
//! framebuffer-based renderer; the rules live in `tui_chess::core`.

use std::fs::File;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;

use tui_chess::cli::Cli;
use tui_chess::config::{Config, CONFIG_ENV, LOG_ENV};
use tui_chess::core::GameState;
use tui_chess::input::{map_event, InputEvent};
use tui_chess::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_chess::types::GameAction;

/// How long to wait for input before re-checking the terminal size.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::resolve(&cli, std::env::var_os(CONFIG_ENV).map(Into::into))?;
    init_logging(&config)?;
    log::info!(
        "starting: capture={} mate_scan={}",
        config.rules.capture_simulation.as_str(),
        config.rules.mate_scan.as_str()
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("exiting on error: {err:#}");
    }
    result
}

/// Logs go to a file only; stderr shares the screen with the board.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let env = env_logger::Env::default().filter_or(LOG_ENV, &config.log_level);
    env_logger::Builder::from_env(env)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let mut game = GameState::new(config.rules);
    let view = GameView::new(config.cell_width, config.cell_height);
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_viewport = None;
    let mut dirty = true;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        if last_viewport != Some(viewport) {
            last_viewport = Some(viewport);
            dirty = true;
        }

        // Render.
        if dirty {
            view.render_into(&game, viewport, &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Drain every pending event before the next frame.
        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        loop {
            let ev = event::read()?;
            match map_event(&ev) {
                Some(InputEvent::Quit) => return Ok(()),
                Some(InputEvent::Resize) => {
                    term.invalidate();
                    dirty = true;
                }
                Some(InputEvent::Action(action)) => {
                    dirty |= game.apply_action(action);
                }
                Some(InputEvent::Pointer { column, row }) => {
                    match view.square_at(viewport, column, row) {
                        Some(square) => dirty |= game.apply_action(GameAction::Click(square)),
                        // Off-board clicks only matter when they restart a finished game.
                        None if game.game_over() => dirty |= game.apply_action(GameAction::Restart),
                        None => {}
                    }
                }
                None => {}
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
    }
}
