use crate::game::{Phase, RoundEnd};
use crate::types::{Cell, Direction, GameMode, Rect, Tile, NUM_COLS, NUM_ROWS, TILE_SIZE};

/// Everything a renderer needs to draw one frame.
///
/// Rectangles are in board length units. Buffers are reused by
/// [`Game::snapshot_into`](crate::Game::snapshot_into).
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub cols: i32,
    pub rows: i32,
    pub tile_size: i32,
    /// Row-major tiles.
    pub tiles: Vec<Tile>,
    pub player: Rect,
    pub player_cell: Cell,
    pub player_direction: Direction,
    pub enemies: Vec<Rect>,
    /// Armed bombs.
    pub bombs: Vec<Rect>,
    /// Active blast regions.
    pub blasts: Vec<Rect>,
    pub phase: Phase,
    pub mode: GameMode,
    pub level: u32,
    pub fruit_count: u32,
    pub round_end: Option<RoundEnd>,
    /// A bomb detonated this tick.
    pub flash: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.cols = NUM_COLS;
        self.rows = NUM_ROWS;
        self.tile_size = TILE_SIZE;
        self.tiles.clear();
        self.player = Rect::default();
        self.player_cell = Cell::default();
        self.player_direction = Direction::Right;
        self.enemies.clear();
        self.bombs.clear();
        self.blasts.clear();
        self.phase = Phase::NewGame;
        self.mode = GameMode::default();
        self.level = 1;
        self.fruit_count = 0;
        self.round_end = None;
        self.flash = false;
    }

    pub fn tile(&self, cell: Cell) -> Option<Tile> {
        if cell.col < 0 || cell.col >= self.cols || cell.row < 0 || cell.row >= self.rows {
            return None;
        }
        self.tiles
            .get((cell.row as usize) * (self.cols as usize) + (cell.col as usize))
            .copied()
    }

    pub fn playable(&self) -> bool {
        self.phase == Phase::PlayGame
    }

    /// Board size in length units.
    pub fn board_size(&self) -> (i32, i32) {
        (self.cols * self.tile_size, self.rows * self.tile_size)
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            cols: NUM_COLS,
            rows: NUM_ROWS,
            tile_size: TILE_SIZE,
            tiles: Vec::new(),
            player: Rect::default(),
            player_cell: Cell::default(),
            player_direction: Direction::Right,
            enemies: Vec::new(),
            bombs: Vec::new(),
            blasts: Vec::new(),
            phase: Phase::NewGame,
            mode: GameMode::default(),
            level: 1,
            fruit_count: 0,
            round_end: None,
            flash: false,
        };
        s.clear();
        s
    }
}
