//! Grid module - tile matrix, walls and fruit
//!
//! The grid owns the static terrain, the single fruit and the single player
//! mark. Moving entities are never written into it: their position is
//! authoritative and collisions between them are rectangle tests.
//!
//! Storage is a flat row-major `Vec<Tile>` (index `row * cols + col`). The parsed
//! layout is kept alongside so [`Grid::reset`] can restore it between rounds.

use tracing::debug;

use crate::error::{CoreError, Result};
use crate::rng::RandomSource;
use crate::types::{Cell, Tile, STANDARD_MAZE};

/// Outcome of moving the player's look-ahead cell from `prev` to `curr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Same cell as last tick, nothing changed.
    Continue,
    /// `curr` is a wall or off the grid; the grid is untouched.
    Blocked,
    /// Moved onto free floor.
    Advanced,
    /// Ate the fruit; a new one was placed.
    Collected,
    /// Ran into an enemy marker.
    Caught,
    /// Ate the fruit but no empty cell is left for the next one.
    Exhausted,
}

impl Resolution {
    /// True when this outcome ends the round.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Resolution::Caught | Resolution::Exhausted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: i32,
    rows: i32,
    tiles: Vec<Tile>,
    /// Layout as parsed, restored on reset.
    pristine: Vec<Tile>,
    fruit: Option<Cell>,
    player_mark: Option<Cell>,
}

impl Grid {
    /// Parse a layout, one string per row.
    ///
    /// `#` wall, `.` empty, `*` fruit, `P` player mark, `E` enemy marker.
    /// Rows must all have the same width; at most one `P` and one `*`.
    pub fn from_layout<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let layout_err = |row, col, reason| CoreError::Layout { row, col, reason };

        let first = rows.first().ok_or(layout_err(0, 0, "layout has no rows"))?;
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(layout_err(0, 0, "layout has no columns"));
        }

        let mut tiles = Vec::with_capacity(cols * rows.len());
        let mut fruit = None;
        let mut player_mark = None;

        for (r, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != cols {
                return Err(layout_err(r, 0, "ragged row"));
            }
            for (c, ch) in line.chars().enumerate() {
                let tile =
                    Tile::from_char(ch).ok_or_else(|| layout_err(r, c, "unknown tile character"))?;
                let cell = Cell::new(c as i32, r as i32);
                match tile {
                    Tile::Fruit if fruit.replace(cell).is_some() => {
                        return Err(layout_err(r, c, "more than one fruit"));
                    }
                    Tile::Player if player_mark.replace(cell).is_some() => {
                        return Err(layout_err(r, c, "more than one player mark"));
                    }
                    _ => {}
                }
                tiles.push(tile);
            }
        }

        Ok(Self {
            cols: cols as i32,
            rows: rows.len() as i32,
            pristine: tiles.clone(),
            tiles,
            fruit,
            player_mark,
        })
    }

    /// The 16x16 maze used by the game.
    pub fn standard() -> Result<Self> {
        Self::from_layout(&STANDARD_MAZE)
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.col >= 0 && cell.col < self.cols && cell.row >= 0 && cell.row < self.rows
    }

    #[inline(always)]
    fn index(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some((cell.row as usize) * (self.cols as usize) + (cell.col as usize))
    }

    /// Tile at `cell`, `None` when out of bounds.
    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        self.index(cell).map(|i| self.tiles[i])
    }

    fn set(&mut self, cell: Cell, tile: Tile) {
        if let Some(i) = self.index(cell) {
            self.tiles[i] = tile;
        }
    }

    /// Walls and anything off the grid block movement.
    pub fn is_wall(&self, cell: Cell) -> bool {
        matches!(self.tile(cell), None | Some(Tile::Wall))
    }

    pub fn is_open(&self, cell: Cell) -> bool {
        !self.is_wall(cell)
    }

    pub fn fruit(&self) -> Option<Cell> {
        self.fruit
    }

    pub fn player_mark(&self) -> Option<Cell> {
        self.player_mark
    }

    /// Row-major tile slice.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let cols = self.cols;
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == Tile::Empty)
            .map(move |(i, _)| Cell::new(i as i32 % cols, i as i32 / cols))
    }

    /// Place the fruit if there is none yet.
    ///
    /// Returns where the fruit is, or `None` when the board has no empty cell.
    pub fn seed_fruit<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Cell> {
        if self.fruit.is_some() {
            return self.fruit;
        }
        self.place_fruit(rng)
    }

    /// Restore the layout and reseed the fruit.
    pub fn reset<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        self.tiles.copy_from_slice(&self.pristine);
        self.fruit = None;
        self.player_mark = None;
        for (i, tile) in self.pristine.iter().enumerate() {
            let cell = Cell::new(i as i32 % self.cols, i as i32 / self.cols);
            match tile {
                Tile::Fruit => self.fruit = Some(cell),
                Tile::Player => self.player_mark = Some(cell),
                _ => {}
            }
        }
        self.seed_fruit(rng);
    }

    /// Reconcile the player's look-ahead cell moving from `prev` to `curr`.
    pub fn resolve<R: RandomSource + ?Sized>(
        &mut self,
        prev: Cell,
        curr: Cell,
        rng: &mut R,
    ) -> Resolution {
        if prev == curr {
            return Resolution::Continue;
        }

        match self.tile(curr) {
            None | Some(Tile::Wall) => Resolution::Blocked,
            Some(Tile::Enemy) => Resolution::Caught,
            Some(Tile::Empty) | Some(Tile::Player) => {
                self.mark_player(curr);
                Resolution::Advanced
            }
            Some(Tile::Fruit) => {
                self.fruit = None;
                self.mark_player(curr);
                match self.place_fruit(rng) {
                    Some(_) => Resolution::Collected,
                    None => Resolution::Exhausted,
                }
            }
        }
    }

    fn mark_player(&mut self, cell: Cell) {
        if let Some(old) = self.player_mark {
            if old != cell && self.tile(old) == Some(Tile::Player) {
                self.set(old, Tile::Empty);
            }
        }
        self.set(cell, Tile::Player);
        self.player_mark = Some(cell);
    }

    fn place_fruit<R: RandomSource + ?Sized>(&mut self, rng: &mut R) -> Option<Cell> {
        let count = self.empty_cells().count();
        if count == 0 {
            return None;
        }
        let pick = rng.index(count);
        let cell = self.empty_cells().nth(pick)?;
        self.set(cell, Tile::Fruit);
        self.fruit = Some(cell);
        debug!(col = cell.col, row = cell.row, "fruit placed");
        Some(cell)
    }
}
