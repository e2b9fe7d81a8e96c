//! Terminal maze runner (default binary).
//!
//! One thread, one loop: drain input, tick the game with the measured frame
//! time, render into a reused framebuffer, then sleep out the frame budget.
//! Logs go to a file because stdout is the game screen.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tui_pacbomb::core::{Game, GameConfig, GameSnapshot, Phase};
use tui_pacbomb::input::InputHandler;
use tui_pacbomb::term::{FpsCounter, FrameBuffer, FramePacer, GameView, TerminalRenderer, Viewport};
use tui_pacbomb::types::MAX_FRAME_SECS;

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_tracing(&config.log_path)?;
    info!(
        mode = config.mode.as_str(),
        max_fps = config.max_fps,
        round_over_delay_ms = config.round_over_delay_ms,
        "starting"
    );

    let mut term = TerminalRenderer::new();
    if let Err(err) = term.enter() {
        let _ = term.exit();
        error!(error = %err, "terminal setup failed");
        return Err(err);
    }

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let restored = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "game loop failed");
    }
    result.and(restored)
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let mut game = Game::new(config)?;
    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut pacer = FramePacer::new(config.max_fps);
    let mut fps = FpsCounter::default();

    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let (mut width, mut height) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut last_frame = Instant::now();

    loop {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if let Some(ev) = input.handle_key_event(key, Instant::now()) {
                        game.handle(ev);
                    }
                }
                Event::Resize(w, h) => {
                    width = w;
                    height = h;
                    term.invalidate();
                }
                _ => {}
            }
        }

        let now = Instant::now();
        for ev in input.update(now) {
            game.handle(ev);
        }

        let frame_time = now.saturating_duration_since(last_frame);
        last_frame = now;
        fps.record(frame_time);

        let before = game.phase();
        let phase = game.tick(frame_time.as_secs_f64().min(MAX_FRAME_SECS));
        match phase {
            Phase::QuitGame => {
                info!(level = game.level(), "quit");
                return Ok(());
            }
            // Keys held through the game-over pause do not start the next round.
            Phase::NewGame if before == Phase::GameOver => input.reset(),
            _ => {}
        }

        game.snapshot_into(&mut snap);
        view.render_into_with_fps(&snap, Some(fps.fps()), Viewport::new(width, height), &mut fb);
        term.draw_swap(&mut fb)?;

        pacer.pace();
    }
}
