//! Motion module - continuous travel over a discrete grid
//!
//! Every moving entity (player, enemy, bomb) is a [`Mover`]: an anchor cell, a
//! facing direction, a speed in length units per second and a sub-tile offset.
//! The anchor is the cell being left; the entity is drawn `offset` units past it
//! in the facing direction and is heading into [`Mover::next_cell`].
//!
//! Each tick adds `speed * dt` to the offset. Whole tiles move the anchor, the
//! anchor is clamped to the grid, and an offset that reaches a full tile is
//! handled by the caller's [`BoundaryRule`]:
//!
//! - **Wrap**: keep the remainder (player, bomb)
//! - **Halt**: drop the remainder so the caller can pick a new direction (enemy)
//!
//! A freshly spawned mover ignores its first tick ("priming"), so the frame in
//! which something is created never moves it.

use crate::types::{Cell, Direction, Rect, WALL_FLUSH_EPSILON};

/// What to do with the leftover offset once a full tile has been crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryRule {
    Wrap,
    Halt,
}

/// Result of one [`Mover::advance`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// First tick after spawn; nothing moved.
    Primed,
    /// No time elapsed.
    Idle,
    /// Moved within the current tile.
    Travelling,
    /// Crossed one or more cell boundaries.
    Boundary,
    /// Reached the grid edge in the facing direction; offset is zero.
    Clamped,
}

impl Step {
    /// True when the mover is sitting exactly on a cell boundary.
    pub fn at_boundary(&self) -> bool {
        matches!(self, Step::Boundary | Step::Clamped)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Mover {
    cell: Cell,
    offset: f64,
    direction: Direction,
    speed: f64,
    cols: i32,
    rows: i32,
    tile_size: i32,
    primed: bool,
}

impl Mover {
    pub fn new(
        cell: Cell,
        direction: Direction,
        speed: f64,
        bounds: (i32, i32),
        tile_size: i32,
    ) -> Self {
        let (cols, rows) = bounds;
        let mut mover = Self {
            cell,
            offset: 0.0,
            direction,
            speed,
            cols,
            rows,
            tile_size,
            primed: false,
        };
        mover.cell = mover.clamp(cell);
        mover
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    pub fn is_primed(&self) -> bool {
        self.primed
    }

    /// Grid size as `(cols, rows)`.
    pub fn bounds(&self) -> (i32, i32) {
        (self.cols, self.rows)
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.col < self.cols && cell.row >= 0 && cell.row < self.rows
    }

    fn clamp(&self, cell: Cell) -> Cell {
        Cell::new(
            cell.col.clamp(0, (self.cols - 1).max(0)),
            cell.row.clamp(0, (self.rows - 1).max(0)),
        )
    }

    /// The cell being entered, clamped to the grid.
    pub fn next_cell(&self) -> Cell {
        self.clamp(self.cell.step(self.direction))
    }

    /// The anchor's neighbour in `direction`, `None` when it is off the grid.
    pub fn neighbor(&self, direction: Direction) -> Option<Cell> {
        let cell = self.cell.step(direction);
        self.in_bounds(cell).then_some(cell)
    }

    /// True when the anchor sits on the last cell in the facing direction.
    pub fn at_edge(&self) -> bool {
        self.neighbor(self.direction).is_none()
    }

    /// The two cells the bounding rectangle can overlap: anchor and next cell.
    pub fn footprint(&self) -> [Cell; 2] {
        [self.cell, self.next_cell()]
    }

    /// Bounding rectangle in length units.
    pub fn rect(&self) -> Rect {
        let base = Rect::of_cell(self.cell, self.tile_size);
        let (dx, dy) = self.direction.delta();
        let shift = self.offset as i32;
        base.offset(dx * shift, dy * shift)
    }

    /// Advance by `dt` seconds.
    pub fn advance(&mut self, dt: f64, rule: BoundaryRule) -> Step {
        if !self.primed {
            self.primed = true;
            return Step::Primed;
        }
        if dt.is_nan() || dt <= 0.0 {
            return Step::Idle;
        }

        let tile = self.tile_size as f64;
        self.offset += self.speed * dt;

        let whole = (self.offset / tile).floor() as i32;
        if whole > 0 {
            let (dc, dr) = self.direction.delta();
            let target = Cell::new(self.cell.col + dc * whole, self.cell.row + dr * whole);
            self.cell = self.clamp(target);
        }

        if self.at_edge() {
            self.offset = 0.0;
            return Step::Clamped;
        }

        if self.offset >= tile {
            match rule {
                BoundaryRule::Wrap => self.offset %= tile,
                BoundaryRule::Halt => self.offset = 0.0,
            }
            return Step::Boundary;
        }

        Step::Travelling
    }

    /// Turn 180° without a visual jump.
    ///
    /// Mid-tile the anchor moves onto the cell being entered and the offset
    /// becomes `tile - offset`, so the rectangle and the footprint stay put.
    /// The occupied cells are the footprint, which is unchanged; only the
    /// anchor, as the cell being left, swaps ends.
    pub fn reverse(&mut self) {
        if self.offset > 0.0 {
            let ahead = self.cell.step(self.direction);
            if self.in_bounds(ahead) {
                self.cell = ahead;
                self.offset = self.tile_size as f64 - self.offset;
            } else {
                self.offset = 0.0;
            }
        }
        self.direction = self.direction.opposite();
    }

    /// Face `direction`, snapping onto the anchor cell.
    pub fn turn(&mut self, direction: Direction) {
        self.direction = direction;
        self.offset = 0.0;
    }

    /// Snap back to `prev`, resting flush against the blocking cell ahead.
    pub fn collided_with_wall(&mut self, prev: Cell) {
        if self.in_bounds(prev) {
            self.cell = prev;
            self.offset = self.tile_size as f64 - WALL_FLUSH_EPSILON;
        } else {
            self.offset = 0.0;
        }
    }

    /// Put the mover back at a spawn point, unprimed.
    pub fn respawn(&mut self, cell: Cell, direction: Direction) {
        self.cell = self.clamp(cell);
        self.direction = direction;
        self.offset = 0.0;
        self.primed = false;
    }
}
