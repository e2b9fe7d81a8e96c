//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The standard maze is a 16x16 tile grid:
//!
//! - **Columns**: 16 (indexed 0-15, left to right)
//! - **Rows**: 16 (indexed 0-15, top to bottom)
//! - **Tile size**: 48 length units; every position, speed and rectangle in the
//!   simulation is expressed in these units
//!
//! # Motion Constants
//!
//! Speeds are in tiles per second and are scaled by [`TILE_SIZE`] when an
//! entity is spawned:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PLAYER_SPEED_TILES` | 5.0 | Player travel speed |
//! | `ENEMY_SPEED_TILES` | 3.0 | Enemy random-walk speed |
//! | `BOMB_SPEED_TILES` | 7.0 | Planted bomb travel speed |
//! | `BLAST_LIFETIME_SECS` | 0.2 | How long a detonated bomb keeps clearing enemies |
//! | `ROUND_OVER_DELAY_MS` | 2000 | Pause between a finished round and the next one |
//!
//! # Examples
//!
//! ```
//! use tui_pacbomb_types::{Cell, Direction, Rect, TILE_SIZE};
//!
//! // Directions know their opposite and their grid delta
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//! assert_eq!(Direction::Up.delta(), (0, -1));
//!
//! // Cells step in a direction
//! assert_eq!(Cell::new(2, 8).step(Direction::Right), Cell::new(3, 8));
//!
//! // Rectangles overlap when they share area
//! let a = Rect::new(0, 0, TILE_SIZE, TILE_SIZE);
//! let b = Rect::new(TILE_SIZE - 1, 0, TILE_SIZE, TILE_SIZE);
//! assert!(a.intersects(&b));
//! ```

/// Number of columns in the standard maze
pub const NUM_COLS: i32 = 16;

/// Number of rows in the standard maze
pub const NUM_ROWS: i32 = 16;

/// Size of one tile in length units
pub const TILE_SIZE: i32 = 48;

/// Player speed in tiles per second
pub const PLAYER_SPEED_TILES: f64 = 5.0;

/// Enemy speed in tiles per second
pub const ENEMY_SPEED_TILES: f64 = 3.0;

/// Bomb speed in tiles per second
pub const BOMB_SPEED_TILES: f64 = 7.0;

/// Player spawn cell
pub const PLAYER_SPAWN: Cell = Cell::new(2, 8);

/// Player spawn facing
pub const PLAYER_SPAWN_DIRECTION: Direction = Direction::Right;

/// Enemy spawn cells (bomb mode)
pub const ENEMY_SPAWNS: [Cell; 4] = [
    Cell::new(7, 7),
    Cell::new(8, 7),
    Cell::new(7, 8),
    Cell::new(8, 8),
];

/// Enemy spawn facing
pub const ENEMY_SPAWN_DIRECTION: Direction = Direction::Right;

/// Blast duration after a bomb detonates (seconds)
pub const BLAST_LIFETIME_SECS: f64 = 0.2;

/// Blast reach in tiles on each side of the bomb's cell (3x3 tiles total)
pub const BLAST_RADIUS_TILES: i32 = 1;

/// Pause between the end of a round and the next `NewGame` (milliseconds)
pub const ROUND_OVER_DELAY_MS: u32 = 2000;

/// Gap left between an entity and the wall it bumped into (length units)
pub const WALL_FLUSH_EPSILON: f64 = 0.01;

/// Default soft frame cap (frames per second, 0 disables pacing)
pub const DEFAULT_MAX_FPS: f64 = 60.0;

/// Largest elapsed time fed into one simulation tick (seconds)
///
/// Smaller than the time the fastest entity (the bomb) needs to cross a tile,
/// so a stalled frame can never carry an entity through a wall.
pub const MAX_FRAME_SECS: f64 = 0.1;

/// The standard maze.
///
/// `#` wall, `.` empty, `P` player mark, `*` fruit, `E` enemy marker.
pub const STANDARD_MAZE: [&str; NUM_ROWS as usize] = [
    "################",
    "#..............#",
    "#.###.###.##.#.#",
    "#.#.......##.#.#",
    "#.###.###......#",
    "#.........#.#.##",
    "#.###.#.###.#..#",
    "#.....#.....##.#",
    "#.P...#.....##.#",
    "#.###.#.###.#..#",
    "#.........#.#.##",
    "#.###.###......#",
    "#.#.......##.#.#",
    "#.###.###.##.#.#",
    "#..............#",
    "################",
];

/// Facing of a moving entity.
///
/// There is no "none" state: an entity always faces somewhere, even when it
/// has not moved yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order used for uniform random picks
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction pointing the other way
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacbomb_types::Direction;
    ///
    /// assert_eq!(Direction::Up.opposite(), Direction::Down);
    /// assert_eq!(Direction::Right.opposite(), Direction::Left);
    /// ```
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Column/row delta of one step in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// True when `other` is a 180° turn away from `self`
    pub fn is_reversal_of(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// Accepts full names or single letters: "up" | "u", "down" | "d",
    /// "left" | "l", "right" | "r"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Static content of one grid cell
///
/// - **Empty**: free floor
/// - **Wall**: impassable terrain
/// - **Fruit**: collectable item
/// - **Player**: the single cell the player is currently entering
/// - **Enemy**: hazard marker from a layout (moving enemies are never tagged)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    Fruit,
    Player,
    Enemy,
}

impl Tile {
    /// Parse a layout character
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacbomb_types::Tile;
    ///
    /// assert_eq!(Tile::from_char('#'), Some(Tile::Wall));
    /// assert_eq!(Tile::from_char('.'), Some(Tile::Empty));
    /// assert_eq!(Tile::from_char('?'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Tile::Empty),
            '#' => Some(Tile::Wall),
            '*' => Some(Tile::Fruit),
            'P' => Some(Tile::Player),
            'E' => Some(Tile::Enemy),
            _ => None,
        }
    }

    /// Layout character for this tile
    pub fn as_char(&self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Wall => '#',
            Tile::Fruit => '*',
            Tile::Player => 'P',
            Tile::Enemy => 'E',
        }
    }
}

/// Discrete grid position: `col` counts left to right, `row` top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The neighbouring cell one step in `direction` (unbounded)
    pub fn step(&self, direction: Direction) -> Self {
        let (dc, dr) = direction.delta();
        Self {
            col: self.col + dc,
            row: self.row + dr,
        }
    }

    /// Top-left corner of this cell in length units
    pub fn origin(&self, tile_size: i32) -> (i32, i32) {
        (self.col * tile_size, self.row * tile_size)
    }
}

/// Axis-aligned rectangle in length units
///
/// Origin is the top-left corner of the grid; `x` grows right, `y` grows down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// The full tile rectangle of `cell`
    pub fn of_cell(cell: Cell, tile_size: i32) -> Self {
        let (x, y) = cell.origin(tile_size);
        Self::new(x, y, tile_size, tile_size)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// True when both rectangles share a non-zero area
    ///
    /// Rectangles that only touch along an edge do not intersect, and an empty
    /// rectangle never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.x + other.w
            && other.x < self.x + self.w
            && self.y < other.y + other.h
            && other.y < self.y + self.h
    }

    /// Grow the rectangle by `by` on every side
    pub fn expand(&self, by: i32) -> Self {
        Self::new(self.x - by, self.y - by, self.w + 2 * by, self.h + 2 * by)
    }

    /// Shift the rectangle by `(dx, dy)`
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }
}

/// Which rule set a session runs
///
/// - **Classic**: collect fruit, avoid walls; no enemies, no bombs
/// - **Bombs**: random-walk enemies and plantable bombs; clearing every enemy
///   wins the round and advances the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    Classic,
    #[default]
    Bombs,
}

impl GameMode {
    /// Parse mode from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacbomb_types::GameMode;
    ///
    /// assert_eq!(GameMode::from_str("classic"), Some(GameMode::Classic));
    /// assert_eq!(GameMode::from_str("BOMBS"), Some(GameMode::Bombs));
    /// assert_eq!(GameMode::from_str("arcade"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "simple" => Some(GameMode::Classic),
            "bombs" | "bomb" => Some(GameMode::Bombs),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Classic => "classic",
            GameMode::Bombs => "bombs",
        }
    }

    pub fn has_enemies(&self) -> bool {
        matches!(self, GameMode::Bombs)
    }
}

/// Input consumed by the simulation
///
/// Produced by the terminal input layer; the simulation never sees raw keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A movement key went down
    KeyDown(Direction),
    /// A movement key went up
    KeyUp(Direction),
    /// Plant a bomb in front of the player (bomb mode)
    PlantBomb,
    /// Leave the game
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_maze_matches_grid_dimensions() {
        assert_eq!(STANDARD_MAZE.len(), NUM_ROWS as usize);
        for row in STANDARD_MAZE {
            assert_eq!(row.chars().count(), NUM_COLS as usize, "ragged row: {row}");
        }
    }

    #[test]
    fn spawns_sit_on_open_floor() {
        let tile_at = |cell: Cell| {
            STANDARD_MAZE[cell.row as usize]
                .chars()
                .nth(cell.col as usize)
                .and_then(Tile::from_char)
        };

        assert_eq!(tile_at(PLAYER_SPAWN), Some(Tile::Player));
        for cell in ENEMY_SPAWNS {
            assert_eq!(tile_at(cell), Some(Tile::Empty), "enemy spawn {cell:?}");
        }
    }

    #[test]
    fn max_frame_is_shorter_than_a_bomb_tile_crossing() {
        assert!(MAX_FRAME_SECS < 1.0 / BOMB_SPEED_TILES);
    }

    #[test]
    fn touching_rects_do_not_intersect() {
        let a = Rect::new(0, 0, TILE_SIZE, TILE_SIZE);
        let b = Rect::new(TILE_SIZE, 0, TILE_SIZE, TILE_SIZE);
        assert!(!a.intersects(&b));
        assert!(!Rect::new(10, 10, 0, 5).intersects(&a));
    }

    #[test]
    fn expand_grows_every_side() {
        let blast = Rect::of_cell(Cell::new(3, 4), TILE_SIZE).expand(TILE_SIZE);
        assert_eq!(blast, Rect::new(2 * TILE_SIZE, 3 * TILE_SIZE, 3 * TILE_SIZE, 3 * TILE_SIZE));
    }

    #[test]
    fn direction_round_trips_through_str() {
        for d in Direction::ALL {
            assert_eq!(Direction::from_str(d.as_str()), Some(d));
            assert!(d.is_reversal_of(d.opposite()));
        }
    }
}
