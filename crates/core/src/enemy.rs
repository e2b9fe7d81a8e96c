//! Enemies wander: at every cell boundary they pick a uniformly random
//! direction whose next cell is open.

use crate::motion::{BoundaryRule, Mover, Step};
use crate::rng::RandomSource;
use crate::types::{Cell, Direction, Rect, ENEMY_SPEED_TILES, NUM_COLS, NUM_ROWS, TILE_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    mover: Mover,
}

impl Enemy {
    pub fn new(
        spawn: Cell,
        direction: Direction,
        speed: f64,
        bounds: (i32, i32),
        tile_size: i32,
    ) -> Self {
        Self {
            mover: Mover::new(spawn, direction, speed, bounds, tile_size),
        }
    }

    /// An enemy on the standard grid at the standard speed.
    pub fn standard(spawn: Cell, direction: Direction) -> Self {
        Self::new(
            spawn,
            direction,
            ENEMY_SPEED_TILES * TILE_SIZE as f64,
            (NUM_COLS, NUM_ROWS),
            TILE_SIZE,
        )
    }

    pub fn mover(&self) -> &Mover {
        &self.mover
    }

    pub fn cell(&self) -> Cell {
        self.mover.cell()
    }

    pub fn direction(&self) -> Direction {
        self.mover.direction()
    }

    pub fn rect(&self) -> Rect {
        self.mover.rect()
    }

    /// Move by `dt` seconds, re-picking a direction at each boundary.
    pub fn advance<R: RandomSource + ?Sized>(
        &mut self,
        dt: f64,
        is_open: impl Fn(Cell) -> bool,
        rng: &mut R,
    ) -> Step {
        let step = self.mover.advance(dt, BoundaryRule::Halt);
        if step.at_boundary() {
            self.repick(&is_open, rng);
        }
        step
    }

    /// Draw directions until one leads into an open cell.
    ///
    /// Boxed in on every side, the enemy keeps its facing.
    pub fn repick<R: RandomSource + ?Sized>(
        &mut self,
        is_open: &impl Fn(Cell) -> bool,
        rng: &mut R,
    ) -> Direction {
        let leads_open = |d: Direction| self.mover.neighbor(d).is_some_and(is_open);
        if !Direction::ALL.into_iter().any(leads_open) {
            return self.mover.direction();
        }
        let choice = loop {
            let d = Direction::ALL[rng.index(Direction::ALL.len())];
            if leads_open(d) {
                break d;
            }
        };
        self.mover.turn(choice);
        choice
    }

    pub fn collided_with_wall(&mut self, prev: Cell) {
        self.mover.collided_with_wall(prev);
    }
}
