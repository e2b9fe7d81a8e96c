use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use tui_pacbomb::core::{Game, GameConfig, Grid, Phase, ScriptedRng};
use tui_pacbomb::input::InputHandler;
use tui_pacbomb::types::{Direction, GameMode};

fn key(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
}

fn game() -> Game<ScriptedRng> {
    let config = GameConfig::default().with_mode(GameMode::Bombs);
    Game::with_parts(&config, Grid::standard().unwrap(), ScriptedRng::new([]))
}

fn feed(h: &mut InputHandler, g: &mut Game<ScriptedRng>, ev: KeyEvent, now: Instant) {
    if let Some(input) = h.handle_key_event(ev, now) {
        g.handle(input);
    }
}

#[test]
fn held_arrow_key_starts_the_round() {
    let t0 = Instant::now();
    let mut h = InputHandler::new();
    let mut g = game();

    feed(&mut h, &mut g, key(KeyCode::Right, KeyEventKind::Press), t0);
    assert_eq!(g.tick(0.016), Phase::PlayGame);
}

#[test]
fn synthesized_release_clears_held_key_in_game() {
    let t0 = Instant::now();
    let mut h = InputHandler::new().with_key_release_timeout_ms(100);
    let mut g = game();

    feed(&mut h, &mut g, key(KeyCode::Char('w'), KeyEventKind::Press), t0);
    assert!(g.player().any_key_held());
    assert_eq!(g.player().turns().queue().front(), Some(&Direction::Up));

    for ev in h.update(t0 + Duration::from_millis(200)) {
        g.handle(ev);
    }
    assert!(!g.player().any_key_held());
    // Queued turn survives the release; it is applied at the next boundary.
    assert_eq!(g.player().turns().queue().front(), Some(&Direction::Up));
    assert_eq!(g.tick(0.016), Phase::NewGame);
}

#[test]
fn space_plants_and_q_quits() {
    let t0 = Instant::now();
    let mut h = InputHandler::new();
    let mut g = game();

    feed(&mut h, &mut g, key(KeyCode::Char('d'), KeyEventKind::Press), t0);
    g.tick(0.016);
    feed(&mut h, &mut g, key(KeyCode::Char(' '), KeyEventKind::Press), t0);
    assert_eq!(g.bombs().len(), 1);

    // Releasing space does nothing.
    feed(&mut h, &mut g, key(KeyCode::Char(' '), KeyEventKind::Release), t0);
    assert_eq!(g.bombs().len(), 1);

    feed(&mut h, &mut g, key(KeyCode::Char('q'), KeyEventKind::Press), t0);
    assert_eq!(g.phase(), Phase::QuitGame);
    assert_eq!(g.tick(0.016), Phase::QuitGame);
}
