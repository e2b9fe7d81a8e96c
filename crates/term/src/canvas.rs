//! Pixel-style drawing surface over a framebuffer region.
//!
//! Scene code draws in board length units through the [`Canvas`] trait. The
//! terminal implementation, [`FrameCanvas`], maps a fixed number of length
//! units onto each terminal cell and paints solid blocks.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::Rect;

/// Minimal immediate-mode drawing contract.
pub trait Canvas {
    /// Drawable area in length units.
    fn output_size(&self) -> (i32, i32);
    fn set_draw_color(&mut self, color: Rgb);
    /// Fill the whole drawable area with the current color.
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect);
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32);
}

const BLOCK: char = '█';

pub struct FrameCanvas<'a> {
    fb: &'a mut FrameBuffer,
    x: u16,
    y: u16,
    cols: u16,
    rows: u16,
    /// Length units per terminal column.
    unit_w: i32,
    /// Length units per terminal row.
    unit_h: i32,
    color: Rgb,
}

impl<'a> FrameCanvas<'a> {
    /// Canvas over the `cols x rows` cells starting at `(x, y)`.
    pub fn new(
        fb: &'a mut FrameBuffer,
        (x, y): (u16, u16),
        (cols, rows): (u16, u16),
        (unit_w, unit_h): (i32, i32),
    ) -> Self {
        Self {
            fb,
            x,
            y,
            cols,
            rows,
            unit_w: unit_w.max(1),
            unit_h: unit_h.max(1),
            color: Rgb::WHITE,
        }
    }

    fn paint(&mut self, col: i32, row: i32) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        self.fb.put_char(
            self.x + col as u16,
            self.y + row as u16,
            BLOCK,
            CellStyle::solid(self.color),
        );
    }
}

fn round_div(v: i32, unit: i32) -> i32 {
    (v as f64 / unit as f64).round() as i32
}

impl Canvas for FrameCanvas<'_> {
    fn output_size(&self) -> (i32, i32) {
        (self.cols as i32 * self.unit_w, self.rows as i32 * self.unit_h)
    }

    fn set_draw_color(&mut self, color: Rgb) {
        self.color = color;
    }

    fn clear(&mut self) {
        let style = CellStyle::solid(self.color);
        self.fb
            .fill_rect(self.x, self.y, self.cols, self.rows, BLOCK, style);
    }

    fn fill_rect(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        let c0 = round_div(rect.x, self.unit_w).max(0);
        let c1 = round_div(rect.x + rect.w, self.unit_w).min(self.cols as i32);
        let r0 = round_div(rect.y, self.unit_h).max(0);
        let r1 = round_div(rect.y + rect.h, self.unit_h).min(self.rows as i32);
        for row in r0..r1 {
            for col in c0..c1 {
                self.paint(col, row);
            }
        }
    }

    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        // Bresenham over terminal cells.
        let (mut cx, mut cy) = (x0.div_euclid(self.unit_w), y0.div_euclid(self.unit_h));
        let (ex, ey) = (x1.div_euclid(self.unit_w), y1.div_euclid(self.unit_h));
        let dx = (ex - cx).abs();
        let dy = -(ey - cy).abs();
        let sx = if cx < ex { 1 } else { -1 };
        let sy = if cy < ey { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.paint(cx, cy);
            if cx == ex && cy == ey {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                cx += sx;
            }
            if e2 <= dx {
                err += dx;
                cy += sy;
            }
        }
    }
}
