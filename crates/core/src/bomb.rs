//! Bombs travel in a straight line and blow up in front of the first wall.
//!
//! Lifecycle: `Armed -> Exploding -> Spent`. The blast covers the 3x3 tiles
//! centred on the bomb's cell and is reported from the detonation tick until
//! the blast lifetime runs out.

use tracing::debug;

use crate::motion::{BoundaryRule, Mover, Step};
use crate::types::{
    Cell, Direction, Rect, BLAST_LIFETIME_SECS, BLAST_RADIUS_TILES, BOMB_SPEED_TILES, NUM_COLS,
    NUM_ROWS, TILE_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BombPhase {
    Armed,
    Exploding { remaining: f64 },
    Spent,
}

/// What a bomb did during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BombEvent {
    /// Still travelling, or already spent.
    Quiet,
    /// Blew up this tick.
    Detonated(Rect),
    /// Still burning.
    Blast(Rect),
}

impl BombEvent {
    pub fn blast(&self) -> Option<Rect> {
        match self {
            BombEvent::Detonated(r) | BombEvent::Blast(r) => Some(*r),
            BombEvent::Quiet => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bomb {
    mover: Mover,
    phase: BombPhase,
    lifetime: f64,
}

impl Bomb {
    pub fn new(
        cell: Cell,
        direction: Direction,
        speed: f64,
        bounds: (i32, i32),
        tile_size: i32,
    ) -> Self {
        Self {
            mover: Mover::new(cell, direction, speed, bounds, tile_size),
            phase: BombPhase::Armed,
            lifetime: BLAST_LIFETIME_SECS,
        }
    }

    /// A bomb on the standard grid at the standard speed.
    pub fn standard(cell: Cell, direction: Direction) -> Self {
        Self::new(
            cell,
            direction,
            BOMB_SPEED_TILES * TILE_SIZE as f64,
            (NUM_COLS, NUM_ROWS),
            TILE_SIZE,
        )
    }

    pub fn with_lifetime(mut self, secs: f64) -> Self {
        self.lifetime = secs;
        self
    }

    pub fn mover(&self) -> &Mover {
        &self.mover
    }

    pub fn phase(&self) -> BombPhase {
        self.phase
    }

    pub fn cell(&self) -> Cell {
        self.mover.cell()
    }

    pub fn rect(&self) -> Rect {
        self.mover.rect()
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.phase, BombPhase::Armed)
    }

    pub fn is_exploding(&self) -> bool {
        matches!(self.phase, BombPhase::Exploding { .. })
    }

    pub fn is_spent(&self) -> bool {
        matches!(self.phase, BombPhase::Spent)
    }

    /// 3x3 tiles centred on the bomb's cell.
    pub fn blast_region(&self) -> Rect {
        let tile = self.mover.tile_size();
        Rect::of_cell(self.mover.cell(), tile).expand(BLAST_RADIUS_TILES * tile)
    }

    /// Active blast region, if the bomb is exploding.
    pub fn active_blast(&self) -> Option<Rect> {
        self.is_exploding().then(|| self.blast_region())
    }

    /// Run one tick of `dt` seconds.
    ///
    /// `is_wall` decides whether the cell ahead stops the bomb.
    pub fn advance(&mut self, dt: f64, is_wall: impl Fn(Cell) -> bool) -> BombEvent {
        match self.phase {
            BombPhase::Armed => {
                let step = self.mover.advance(dt, BoundaryRule::Wrap);
                if step == Step::Clamped || is_wall(self.mover.next_cell()) {
                    self.phase = BombPhase::Exploding {
                        remaining: self.lifetime,
                    };
                    let region = self.blast_region();
                    debug!(col = self.cell().col, row = self.cell().row, "bomb detonated");
                    BombEvent::Detonated(region)
                } else {
                    BombEvent::Quiet
                }
            }
            BombPhase::Exploding { remaining } => {
                let left = if dt > 0.0 { remaining - dt } else { remaining };
                if left <= 0.0 {
                    self.phase = BombPhase::Spent;
                    BombEvent::Quiet
                } else {
                    self.phase = BombPhase::Exploding { remaining: left };
                    BombEvent::Blast(self.blast_region())
                }
            }
            BombPhase::Spent => BombEvent::Quiet,
        }
    }
}
