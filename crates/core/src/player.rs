//! The player: a wrapping mover steered by buffered turns.

use tracing::debug;

use crate::motion::{BoundaryRule, Mover, Step};
use crate::turns::TurnBuffer;
use crate::types::{
    Cell, Direction, Rect, NUM_COLS, NUM_ROWS, PLAYER_SPAWN, PLAYER_SPAWN_DIRECTION,
    PLAYER_SPEED_TILES, TILE_SIZE,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    mover: Mover,
    turns: TurnBuffer,
    spawn: Cell,
    spawn_direction: Direction,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(
            PLAYER_SPAWN,
            PLAYER_SPAWN_DIRECTION,
            PLAYER_SPEED_TILES * TILE_SIZE as f64,
            (NUM_COLS, NUM_ROWS),
            TILE_SIZE,
        )
    }
}

impl Player {
    pub fn new(
        spawn: Cell,
        direction: Direction,
        speed: f64,
        bounds: (i32, i32),
        tile_size: i32,
    ) -> Self {
        Self {
            mover: Mover::new(spawn, direction, speed, bounds, tile_size),
            turns: TurnBuffer::new(),
            spawn,
            spawn_direction: direction,
        }
    }

    pub fn mover(&self) -> &Mover {
        &self.mover
    }

    pub fn turns(&self) -> &TurnBuffer {
        &self.turns
    }

    pub fn cell(&self) -> Cell {
        self.mover.cell()
    }

    pub fn next_cell(&self) -> Cell {
        self.mover.next_cell()
    }

    pub fn direction(&self) -> Direction {
        self.mover.direction()
    }

    pub fn offset(&self) -> f64 {
        self.mover.offset()
    }

    pub fn rect(&self) -> Rect {
        self.mover.rect()
    }

    pub fn spawn(&self) -> (Cell, Direction) {
        (self.spawn, self.spawn_direction)
    }

    pub fn any_key_held(&self) -> bool {
        self.turns.any_held()
    }

    pub fn key_down(&mut self, key: Direction) {
        self.turns.on_key_down(key, self.mover.direction());
    }

    pub fn key_up(&mut self, key: Direction) {
        self.turns.on_key_up(key, self.mover.direction());
    }

    /// Move by `dt` seconds.
    ///
    /// A queued reversal is applied straight away; any other turn waits for a
    /// cell boundary. Turns are taken whatever lies ahead, so turning into a
    /// wall shows up as a blocked look-ahead cell for the grid to resolve.
    pub fn advance(&mut self, dt: f64) -> Step {
        if self.mover.is_primed() && dt > 0.0 {
            if let Some(turn) = self.turns.front() {
                if turn.is_reversal_of(self.mover.direction()) {
                    self.turns.pop();
                    self.mover.reverse();
                    debug!(direction = turn.as_str(), "player reversed");
                }
            }
        }

        let step = self.mover.advance(dt, BoundaryRule::Wrap);
        if step.at_boundary() {
            self.take_turn();
        }
        step
    }

    fn take_turn(&mut self) {
        let Some(turn) = self.turns.front() else {
            return;
        };
        if turn.is_reversal_of(self.mover.direction()) {
            self.turns.pop();
            self.mover.reverse();
            return;
        }
        self.turns.pop();
        self.mover.turn(turn);
        debug!(direction = turn.as_str(), col = self.cell().col, row = self.cell().row, "player turned");
    }

    /// Snap back after bumping a wall.
    pub fn collided_with_wall(&mut self, prev: Cell) {
        self.mover.collided_with_wall(prev);
    }

    /// Back to spawn with no keys held and no turns pending.
    pub fn reset(&mut self) {
        self.mover.respawn(self.spawn, self.spawn_direction);
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primed_player() -> Player {
        let mut p = Player::default();
        p.advance(0.016);
        p
    }

    #[test]
    fn spawns_facing_right_at_spawn_cell() {
        let p = Player::default();
        assert_eq!(p.cell(), PLAYER_SPAWN);
        assert_eq!(p.direction(), Direction::Right);
        assert_eq!(p.next_cell(), Cell::new(3, 8));
    }

    #[test]
    fn reversal_applies_mid_tile() {
        let mut p = primed_player();
        p.advance(0.1);
        assert!((p.offset() - 24.0).abs() < 1e-6);

        p.key_down(Direction::Left);
        p.advance(0.0);
        // dt == 0 never applies turns
        assert_eq!(p.direction(), Direction::Right);

        p.advance(0.05);
        assert_eq!(p.direction(), Direction::Left);
        assert_eq!(p.cell(), Cell::new(3, 8));
        // 48 - 24 + 12
        assert!((p.offset() - 36.0).abs() < 1e-6);
    }

    #[test]
    fn perpendicular_turn_waits_for_boundary() {
        let mut p = primed_player();
        p.key_down(Direction::Up);
        p.advance(0.1);
        assert_eq!(p.direction(), Direction::Right);
        assert_eq!(p.turns().front(), Some(Direction::Up));

        p.advance(0.1);
        assert_eq!(p.direction(), Direction::Up);
        assert_eq!(p.cell(), Cell::new(3, 8));
        assert_eq!(p.offset(), 0.0);
        assert!(p.turns().queue().is_empty());
    }

    #[test]
    fn turn_toward_wall_is_still_taken_at_boundary() {
        let mut p = primed_player();
        p.key_down(Direction::Up);
        p.advance(0.2);
        assert_eq!(p.cell(), Cell::new(3, 8));
        assert_eq!(p.direction(), Direction::Up);
        assert_eq!(p.next_cell(), Cell::new(3, 7));
        assert!(p.turns().queue().is_empty());
    }

    #[test]
    fn reset_returns_to_spawn() {
        let mut p = primed_player();
        p.key_down(Direction::Down);
        p.advance(0.3);
        p.reset();
        assert_eq!(p.cell(), PLAYER_SPAWN);
        assert_eq!(p.direction(), Direction::Right);
        assert!(!p.any_key_held());
        assert!(!p.mover().is_primed());
    }
}
