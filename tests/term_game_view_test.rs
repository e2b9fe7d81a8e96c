use tui_pacbomb::core::{Game, GameConfig, Grid, ScriptedRng};
use tui_pacbomb::term::game_view::{ENEMY_COLOR, FRUIT_COLOR, PLAYER_COLOR, WALL_COLOR};
use tui_pacbomb::term::{AnchorY, FrameBuffer, GameView, Rgb, Viewport};
use tui_pacbomb::types::{Direction, GameMode, InputEvent};

fn game(mode: GameMode) -> Game<ScriptedRng> {
    let config = GameConfig::default().with_mode(mode);
    Game::with_parts(&config, Grid::standard().unwrap(), ScriptedRng::new([]))
}

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height()).map(|y| fb.row_text(y)).collect::<Vec<_>>().join("\n")
}

#[test]
fn term_view_renders_border_corners() {
    let snap = game(GameMode::Bombs).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board = 16*2 by 16*1 => 32x16, plus border => 34x18
    let fb = view.render(&snap, Viewport::new(34, 18));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(33, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 17).unwrap().ch, '└');
    assert_eq!(fb.get(33, 17).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_maze_walls_two_chars_wide() {
    let snap = game(GameMode::Classic).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(34, 18));

    // Inside border: (1,1) origin. The whole top maze row is wall.
    for x in 1..33 {
        let cell = fb.get(x, 1).unwrap();
        assert_eq!(cell.ch, '█');
        assert_eq!(cell.style.bg, WALL_COLOR);
    }
    // (2,1) is open floor; the first fruit lands on (1,1).
    assert_eq!(fb.get(5, 2).unwrap().style.bg, Rgb::BLACK);
    assert_eq!(fb.get(3, 2).unwrap().style.bg, FRUIT_COLOR);
}

#[test]
fn term_view_draws_player_and_enemies_at_spawn() {
    let snap = game(GameMode::Bombs).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(34, 18));

    // Player spawn (2,8) -> columns 5..7, row 9.
    assert_eq!(fb.get(5, 9).unwrap().style.bg, PLAYER_COLOR);
    assert_eq!(fb.get(6, 9).unwrap().style.bg, PLAYER_COLOR);
    // Enemy spawn (7,7) -> columns 15..17, row 8.
    assert_eq!(fb.get(15, 8).unwrap().style.bg, ENEMY_COLOR);
    assert_eq!(fb.get(16, 8).unwrap().style.bg, ENEMY_COLOR);
}

#[test]
fn term_view_shows_level_and_start_prompt() {
    let snap = game(GameMode::Bombs).snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(34, 18));
    let text = screen_text(&fb);
    assert!(text.contains("Level: 1"));
    assert!(text.contains("PRESS A MOVE KEY"));
}

#[test]
fn term_view_drops_prompt_once_playing() {
    let mut g = game(GameMode::Bombs);
    g.handle(InputEvent::KeyDown(Direction::Right));
    g.tick(0.016);
    let fb = GameView::default().render(&g.snapshot(), Viewport::new(34, 18));
    assert!(!screen_text(&fb).contains("PRESS A MOVE KEY"));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let snap = game(GameMode::Bombs).snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);

    let fb = view.render(&snap, Viewport::new(70, 18));
    let text = screen_text(&fb);
    assert!(text.contains("MODE"));
    assert!(text.contains("bombs"));
    assert!(text.contains("ENEMIES"));

    let fb = view.render(&snap, Viewport::new(34, 18));
    assert!(!screen_text(&fb).contains("MODE"));
}

#[test]
fn term_view_render_into_reuses_and_resizes_buffer() {
    let snap = game(GameMode::Classic).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(10, 10);
    view.render_into(&snap, Viewport::new(40, 20), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 20));
    assert_eq!(fb, view.render(&snap, Viewport::new(40, 20)));
}
