//! Terminal client for ASCII Pong
//!
//! Renders the `game_core` simulation as a character grid and reads the two
//! players' keys from a raw-mode terminal.

pub mod config;
pub mod fsm;
pub mod game_loop;
pub mod renderer;
pub mod terminal;

use std::sync::atomic::Ordering;

use anyhow::Context;
use game_core::{Config, Game};
use log::info;

use config::{LoopConfig, RenderConfig};
use game_loop::{GameLoop, SystemEnv};
use renderer::Renderer;
use terminal::{StdoutSink, TerminalKeys, TerminalSession};

/// Play one session on the current terminal until the quit key or a
/// termination signal
pub fn run() -> anyhow::Result<()> {
    let config = Config::default();
    let renderer = Renderer::new(RenderConfig::default(), &config);
    let game = Game::init(config);

    let mut game_loop = GameLoop::new(
        game,
        renderer,
        LoopConfig::default(),
        SystemEnv::new(),
        TerminalKeys::new(),
        StdoutSink::new(),
    );

    // SIGINT, SIGTERM and SIGHUP stop the loop so the session drop restores the terminal
    let interrupted = game_loop.interrupt_flag();
    ctrlc::set_handler(move || interrupted.store(true, Ordering::SeqCst))
        .context("failed to install the termination handler")?;

    let session = TerminalSession::acquire().context("failed to put the terminal in raw mode")?;
    info!("Session started");

    game_loop.run();

    drop(session);

    let score = game_loop.game().score();
    info!(
        "Session ended after {} frames, final score L={} R={}",
        game_loop.frames_drawn(),
        score.left,
        score.right
    );
    Ok(())
}
