//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::{Canvas, FrameCanvas};
use crate::core::{GameSnapshot, Phase};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, Rect, Tile};

pub const WALL_COLOR: Rgb = Rgb::new(0, 0, 255);
pub const FRUIT_COLOR: Rgb = Rgb::new(255, 0, 0);
pub const PLAYER_COLOR: Rgb = Rgb::new(255, 255, 0);
pub const ENEMY_COLOR: Rgb = Rgb::new(0, 255, 255);
pub const BOMB_COLOR: Rgb = Rgb::new(255, 140, 0);
pub const BLAST_COLOR: Rgb = Rgb::new(220, 30, 30);
pub const SPARK_COLOR: Rgb = Rgb::new(255, 200, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the maze.
pub struct GameView {
    /// Board tile width in terminal columns.
    cell_w: u16,
    /// Board tile height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Board placement inside the viewport, border included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_fps(snap, None, viewport, fb);
    }

    pub fn render_into_with_fps(
        &self,
        snap: &GameSnapshot,
        fps: Option<u32>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(snap, viewport);
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::BLACK,
            bold: false,
            dim: false,
        };
        self.draw_border(fb, frame, border);

        {
            let unit_w = snap.tile_size / self.cell_w as i32;
            let unit_h = snap.tile_size / self.cell_h as i32;
            let mut canvas = FrameCanvas::new(
                fb,
                (frame.x + 1, frame.y + 1),
                (frame.w.saturating_sub(2), frame.h.saturating_sub(2)),
                (unit_w, unit_h),
            );
            draw_scene(&mut canvas, snap);
        }

        self.draw_hud(fb, snap, frame);
        self.draw_side_panel(fb, snap, fps, viewport, frame);

        match snap.phase {
            Phase::NewGame => self.draw_overlay_text(fb, frame, "PRESS A MOVE KEY"),
            Phase::GameOver => {
                let won = snap.round_end.is_some_and(|end| end.is_win());
                let text = if won { "LEVEL CLEARED" } else { "GAME OVER" };
                self.draw_overlay_text(fb, frame, text);
            }
            Phase::PlayGame | Phase::QuitGame => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal cell of the board's top-left tile.
    pub fn board_origin(&self, snap: &GameSnapshot, viewport: Viewport) -> (u16, u16) {
        let frame = self.frame(snap, viewport);
        (frame.x + 1, frame.y + 1)
    }

    fn frame(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let board_w = (snap.cols.max(0) as u16).saturating_mul(self.cell_w);
        let board_h = (snap.rows.max(0) as u16).saturating_mul(self.cell_h);
        let w = board_w.saturating_add(2);
        let h = board_h.saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
        let Frame { x, y, w, h } = frame;
        if w < 2 || h < 2 {
            return;
        }
        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// `Level: N` on the top border.
    fn draw_hud(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let style = CellStyle {
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            bold: true,
            dim: false,
        };
        let x = frame.x.saturating_add(2);
        fb.put_str(x, frame.y, " Level: ", style);
        let n = fb.put_u32(x + 8, frame.y, snap.level, style);
        fb.put_char(x + 8 + n, frame.y, ' ', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        fps: Option<u32>,
        viewport: Viewport,
        frame: Frame,
    ) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::BLACK,
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::BLACK,
            bold: false,
            dim: false,
        };
        let dim = CellStyle { dim: true, ..value };

        let mut y = frame.y;
        fb.put_str(panel_x, y, "MODE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, snap.mode.as_str(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "FRUIT", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.fruit_count, value);
        y = y.saturating_add(2);

        if snap.mode.has_enemies() {
            fb.put_str(panel_x, y, "ENEMIES", label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, snap.enemies.len() as u32, value);
            y = y.saturating_add(2);
        }

        if let Some(fps) = fps {
            fb.put_str(panel_x, y, "FPS", label);
            y = y.saturating_add(1);
            fb.put_u32(panel_x, y, fps, value);
            y = y.saturating_add(2);
        }

        fb.put_str(panel_x, y, "move  wasd", dim);
        y = y.saturating_add(1);
        if snap.mode.has_enemies() {
            fb.put_str(panel_x, y, "bomb  space", dim);
            y = y.saturating_add(1);
        }
        fb.put_str(panel_x, y, "quit  q", dim);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, frame: Frame, text: &str) {
        let mid_y = frame.y.saturating_add(frame.h / 2);
        let text_w = text.chars().count() as u16;
        let x = frame.x.saturating_add(frame.w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::WHITE,
            bg: Rgb::BLACK,
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Draw one frame of the board onto any [`Canvas`].
///
/// Paint order: background (white on a detonation frame), walls, fruit,
/// armed bombs, enemies, player, then blasts on top.
pub fn draw_scene(canvas: &mut impl Canvas, snap: &GameSnapshot) {
    canvas.set_draw_color(if snap.flash { Rgb::WHITE } else { Rgb::BLACK });
    canvas.clear();

    let ts = snap.tile_size;
    for row in 0..snap.rows {
        for col in 0..snap.cols {
            let color = match snap.tile(Cell::new(col, row)) {
                Some(Tile::Wall) => WALL_COLOR,
                Some(Tile::Fruit) => FRUIT_COLOR,
                _ => continue,
            };
            canvas.set_draw_color(color);
            canvas.fill_rect(Rect::of_cell(Cell::new(col, row), ts));
        }
    }

    canvas.set_draw_color(BOMB_COLOR);
    for &bomb in &snap.bombs {
        canvas.fill_rect(bomb);
    }

    canvas.set_draw_color(ENEMY_COLOR);
    for &enemy in &snap.enemies {
        canvas.fill_rect(enemy);
    }

    canvas.set_draw_color(PLAYER_COLOR);
    canvas.fill_rect(snap.player);

    for &blast in &snap.blasts {
        canvas.set_draw_color(BLAST_COLOR);
        canvas.fill_rect(blast);
        if blast.is_empty() {
            continue;
        }
        let (x0, y0) = (blast.x, blast.y);
        let (x1, y1) = (blast.x + blast.w - 1, blast.y + blast.h - 1);
        canvas.set_draw_color(SPARK_COLOR);
        canvas.draw_line(x0, y0, x1, y1);
        canvas.draw_line(x1, y0, x0, y1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RoundEnd;

    /// Records draw calls instead of painting.
    #[derive(Default)]
    struct Recorder {
        color: Rgb,
        clears: Vec<Rgb>,
        fills: Vec<(Rgb, Rect)>,
        lines: usize,
    }

    impl Canvas for Recorder {
        fn output_size(&self) -> (i32, i32) {
            (768, 768)
        }
        fn set_draw_color(&mut self, color: Rgb) {
            self.color = color;
        }
        fn clear(&mut self) {
            self.clears.push(self.color);
        }
        fn fill_rect(&mut self, rect: Rect) {
            self.fills.push((self.color, rect));
        }
        fn draw_line(&mut self, _x0: i32, _y0: i32, _x1: i32, _y1: i32) {
            self.lines += 1;
        }
    }

    fn snapshot_with_wall() -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        snap.tiles = vec![Tile::Empty; (snap.cols * snap.rows) as usize];
        snap.tiles[0] = Tile::Wall;
        snap.tiles[1] = Tile::Fruit;
        snap.player = Rect::new(96, 384, 48, 48);
        snap
    }

    #[test]
    fn scene_paints_tiles_then_entities() {
        let mut snap = snapshot_with_wall();
        snap.enemies.push(Rect::new(336, 336, 48, 48));
        let mut rec = Recorder::default();
        draw_scene(&mut rec, &snap);

        assert_eq!(rec.clears, vec![Rgb::BLACK]);
        assert_eq!(
            rec.fills,
            vec![
                (WALL_COLOR, Rect::new(0, 0, 48, 48)),
                (FRUIT_COLOR, Rect::new(48, 0, 48, 48)),
                (ENEMY_COLOR, Rect::new(336, 336, 48, 48)),
                (PLAYER_COLOR, Rect::new(96, 384, 48, 48)),
            ]
        );
        assert_eq!(rec.lines, 0);
    }

    #[test]
    fn detonation_frame_clears_white_and_blast_goes_last() {
        let mut snap = snapshot_with_wall();
        snap.flash = true;
        snap.blasts.push(Rect::new(0, 0, 144, 144));
        let mut rec = Recorder::default();
        draw_scene(&mut rec, &snap);

        assert_eq!(rec.clears, vec![Rgb::WHITE]);
        assert_eq!(rec.fills.last(), Some(&(BLAST_COLOR, Rect::new(0, 0, 144, 144))));
        assert_eq!(rec.lines, 2);
    }

    #[test]
    fn board_tiles_map_to_two_columns() {
        let snap = snapshot_with_wall();
        let view = GameView::default();
        let viewport = Viewport::new(34, 18);
        let fb = view.render(&snap, viewport);

        assert_eq!(view.board_origin(&snap, viewport), (1, 1));
        let wall = fb.get(1, 1).map(|c| c.style.bg);
        assert_eq!(wall, Some(WALL_COLOR));
        assert_eq!(fb.get(2, 1).map(|c| c.style.bg), Some(WALL_COLOR));
        assert_eq!(fb.get(3, 1).map(|c| c.style.bg), Some(FRUIT_COLOR));
        // Player at tile (2, 8).
        assert_eq!(fb.get(5, 9).map(|c| c.style.bg), Some(PLAYER_COLOR));
        assert_eq!(fb.get(6, 9).map(|c| c.style.bg), Some(PLAYER_COLOR));
    }

    #[test]
    fn hud_shows_level_on_the_border() {
        let mut snap = snapshot_with_wall();
        snap.level = 12;
        let fb = GameView::default().render(&snap, Viewport::new(34, 18));
        assert!(fb.row_text(0).contains(" Level: 12 "));
    }

    #[test]
    fn overlays_follow_phase_and_outcome() {
        let view = GameView::default();
        let viewport = Viewport::new(34, 18);
        let mut snap = snapshot_with_wall();

        let fb = view.render(&snap, viewport);
        assert!(fb.row_text(9).contains("PRESS A MOVE KEY"));

        snap.phase = Phase::GameOver;
        snap.round_end = Some(RoundEnd::Caught);
        let fb = view.render(&snap, viewport);
        assert!(fb.row_text(9).contains("GAME OVER"));

        snap.round_end = Some(RoundEnd::Cleared);
        let fb = view.render(&snap, viewport);
        assert!(fb.row_text(9).contains("LEVEL CLEARED"));

        snap.phase = Phase::PlayGame;
        let fb = view.render(&snap, viewport);
        assert!(!fb.row_text(9).contains("LEVEL CLEARED"));
    }

    #[test]
    fn side_panel_needs_room() {
        let snap = snapshot_with_wall();
        let view = GameView::default().with_anchor_y(AnchorY::Top);
        let mut fb = FrameBuffer::new(0, 0);
        view.render_into_with_fps(&snap, Some(60), Viewport::new(64, 20), &mut fb);
        assert!(fb.row_text(0).contains("MODE"));
        assert!((0..20).any(|y| fb.row_text(y).contains("FPS")));

        let fb = view.render(&snap, Viewport::new(40, 20));
        assert!(!fb.row_text(0).contains("MODE"));
    }
}
