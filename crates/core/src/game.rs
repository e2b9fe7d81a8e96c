//! Game module - round state machine and per-frame orchestration
//!
//! `NewGame -> PlayGame -> GameOver -> NewGame`, plus the terminal `QuitGame`.
//!
//! One [`Game::tick`] during `PlayGame` runs, in order:
//!
//! 1. player motion (turns, reversals)
//! 2. enemy motion; any enemy touching the player ends the round
//! 3. grid resolution of the player's look-ahead cell
//! 4. bomb motion and blasts against enemies
//! 5. removal of spent bombs
//! 6. end-of-round checks (wall, board full, every enemy cleared)
//!
//! `GameOver` counts down the round-over delay without blocking, then resets
//! the board and waits in `NewGame` for a movement key.

use tracing::{debug, info};

use crate::bomb::{Bomb, BombEvent};
use crate::config::GameConfig;
use crate::enemy::Enemy;
use crate::error::Result;
use crate::grid::{Grid, Resolution};
use crate::player::Player;
use crate::rng::{RandomSource, SecureRng};
use crate::snapshot::GameSnapshot;
use crate::types::{
    GameMode, InputEvent, BOMB_SPEED_TILES, ENEMY_SPAWNS, ENEMY_SPAWN_DIRECTION,
    ENEMY_SPEED_TILES, MAX_FRAME_SECS, PLAYER_SPAWN, PLAYER_SPAWN_DIRECTION, PLAYER_SPEED_TILES, TILE_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for a movement key.
    NewGame,
    PlayGame,
    /// Round finished; counting down to the next one.
    GameOver,
    /// Terminal.
    QuitGame,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NewGame => "new_game",
            Phase::PlayGame => "play_game",
            Phase::GameOver => "game_over",
            Phase::QuitGame => "quit_game",
        }
    }
}

/// Why the last round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundEnd {
    HitWall,
    Caught,
    BoardFull,
    /// Every enemy was blown up (bomb mode).
    Cleared,
}

impl RoundEnd {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundEnd::HitWall => "hit_wall",
            RoundEnd::Caught => "caught",
            RoundEnd::BoardFull => "board_full",
            RoundEnd::Cleared => "cleared",
        }
    }

    pub fn is_win(&self) -> bool {
        matches!(self, RoundEnd::Cleared)
    }
}

#[derive(Debug, Clone)]
pub struct Game<R: RandomSource = SecureRng> {
    mode: GameMode,
    round_over_delay: f64,
    grid: Grid,
    player: Player,
    enemies: Vec<Enemy>,
    bombs: Vec<Bomb>,
    rng: R,
    phase: Phase,
    level: u32,
    fruit_count: u32,
    round_end: Option<RoundEnd>,
    round_over_elapsed: f64,
    flash: bool,
}

impl Game<SecureRng> {
    /// A game on the standard maze with an OS-seeded random source.
    pub fn new(config: &GameConfig) -> Result<Self> {
        let grid = Grid::standard()?;
        let rng = SecureRng::from_os()?;
        Ok(Self::with_parts(config, grid, rng))
    }
}

impl<R: RandomSource> Game<R> {
    /// Assemble a game from an explicit grid and random source.
    pub fn with_parts(config: &GameConfig, mut grid: Grid, mut rng: R) -> Self {
        grid.seed_fruit(&mut rng);
        let bounds = (grid.cols(), grid.rows());
        let tile = TILE_SIZE as f64;
        // A `P` in the layout marks the spawn; the standard maze puts it on PLAYER_SPAWN.
        let spawn = grid.player_mark().unwrap_or(PLAYER_SPAWN);
        let player = Player::new(
            spawn,
            PLAYER_SPAWN_DIRECTION,
            PLAYER_SPEED_TILES * tile,
            bounds,
            TILE_SIZE,
        );
        let mut game = Self {
            mode: config.mode,
            round_over_delay: config.round_over_delay_ms as f64 / 1000.0,
            grid,
            player,
            enemies: Vec::new(),
            bombs: Vec::new(),
            rng,
            phase: Phase::NewGame,
            level: 1,
            fruit_count: 0,
            round_end: None,
            round_over_elapsed: 0.0,
            flash: false,
        };
        game.spawn_enemies();
        game
    }

    fn spawn_enemies(&mut self) {
        self.enemies.clear();
        if !self.mode.has_enemies() {
            return;
        }
        let bounds = (self.grid.cols(), self.grid.rows());
        let speed = ENEMY_SPEED_TILES * TILE_SIZE as f64;
        self.enemies.extend(
            ENEMY_SPAWNS
                .iter()
                .map(|&cell| Enemy::new(cell, ENEMY_SPAWN_DIRECTION, speed, bounds, TILE_SIZE)),
        );
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn fruit_count(&self) -> u32 {
        self.fruit_count
    }

    pub fn round_end(&self) -> Option<RoundEnd> {
        self.round_end
    }

    pub fn flash(&self) -> bool {
        self.flash
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    /// Direct access for scripted setups.
    pub fn enemies_mut(&mut self) -> &mut Vec<Enemy> {
        &mut self.enemies
    }

    pub fn bombs(&self) -> &[Bomb] {
        &self.bombs
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::QuitGame
    }

    /// Feed one input event.
    pub fn handle(&mut self, event: InputEvent) {
        if event == InputEvent::Quit {
            if self.phase != Phase::QuitGame {
                info!(level = self.level, "quit requested");
            }
            self.phase = Phase::QuitGame;
            return;
        }
        if matches!(self.phase, Phase::GameOver | Phase::QuitGame) {
            return;
        }
        match event {
            InputEvent::KeyDown(d) => self.player.key_down(d),
            InputEvent::KeyUp(d) => self.player.key_up(d),
            InputEvent::PlantBomb => {
                self.plant_bomb();
            }
            InputEvent::Quit => {}
        }
    }

    /// Plant a bomb on the player's look-ahead cell, heading the player's way.
    ///
    /// Only in bomb mode while a round is being played.
    pub fn plant_bomb(&mut self) -> bool {
        if self.phase != Phase::PlayGame || self.mode != GameMode::Bombs {
            return false;
        }
        let bomb = Bomb::new(
            self.player.next_cell(),
            self.player.direction(),
            BOMB_SPEED_TILES * TILE_SIZE as f64,
            (self.grid.cols(), self.grid.rows()),
            TILE_SIZE,
        );
        debug!(col = bomb.cell().col, row = bomb.cell().row, "bomb planted");
        self.bombs.push(bomb);
        true
    }

    /// Place an already-built bomb (scripted setups).
    pub fn push_bomb(&mut self, bomb: Bomb) {
        self.bombs.push(bomb);
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Movement uses at most [`MAX_FRAME_SECS`] per call, so nothing crosses
    /// more than one tile in a tick. The game-over countdown uses the full `dt`.
    pub fn tick(&mut self, dt: f64) -> Phase {
        self.flash = false;
        match self.phase {
            Phase::NewGame => {
                if self.player.any_key_held() {
                    self.phase = Phase::PlayGame;
                    info!(level = self.level, mode = self.mode.as_str(), "round started");
                }
            }
            Phase::PlayGame => self.step(dt.clamp(0.0, MAX_FRAME_SECS)),
            Phase::GameOver => {
                if dt > 0.0 {
                    self.round_over_elapsed += dt;
                }
                if self.round_over_elapsed >= self.round_over_delay {
                    self.start_next_round();
                }
            }
            Phase::QuitGame => {}
        }
        self.phase
    }

    fn step(&mut self, dt: f64) {
        let grid = &self.grid;
        let before = self.player.next_cell();
        self.player.advance(dt);

        let player_rect = self.player.rect();
        let mut caught = false;
        for enemy in &mut self.enemies {
            enemy.advance(dt, |c| grid.is_open(c), &mut self.rng);
            if enemy.rect().intersects(&player_rect) {
                caught = true;
                break;
            }
        }
        if caught {
            self.end_round(RoundEnd::Caught);
            return;
        }

        let after = self.player.next_cell();
        let resolution = self.grid.resolve(before, after, &mut self.rng);
        if resolution == Resolution::Collected {
            self.fruit_count += 1;
        }

        let grid = &self.grid;
        for bomb in &mut self.bombs {
            let event = bomb.advance(dt, |c| grid.is_wall(c));
            if let BombEvent::Detonated(_) = event {
                self.flash = true;
            }
            if let Some(region) = event.blast() {
                let before = self.enemies.len();
                self.enemies.retain(|e| !e.rect().intersects(&region));
                let cleared = before - self.enemies.len();
                if cleared > 0 {
                    debug!(cleared, remaining = self.enemies.len(), "enemies caught in blast");
                }
            }
        }
        self.bombs.retain(|b| !b.is_spent());

        match resolution {
            Resolution::Blocked => {
                let settle = self.player.cell().step(self.player.direction().opposite());
                self.player.collided_with_wall(settle);
                self.end_round(RoundEnd::HitWall);
            }
            Resolution::Caught => self.end_round(RoundEnd::Caught),
            Resolution::Exhausted => self.end_round(RoundEnd::BoardFull),
            _ => {
                if self.mode == GameMode::Bombs && self.enemies.is_empty() {
                    self.end_round(RoundEnd::Cleared);
                }
            }
        }
    }

    fn end_round(&mut self, reason: RoundEnd) {
        self.phase = Phase::GameOver;
        self.round_end = Some(reason);
        self.round_over_elapsed = 0.0;
        info!(
            reason = reason.as_str(),
            level = self.level,
            fruit = self.fruit_count,
            "round over"
        );
    }

    fn start_next_round(&mut self) {
        if self.round_end.is_some_and(|r| r.is_win()) {
            self.level += 1;
            info!(level = self.level, "level up");
        }
        self.player.reset();
        self.spawn_enemies();
        self.bombs.clear();
        self.grid.reset(&mut self.rng);
        self.fruit_count = 0;
        self.round_end = None;
        self.round_over_elapsed = 0.0;
        self.phase = Phase::NewGame;
    }

    /// Write the renderer-facing view into `out`, reusing its buffers.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cols = self.grid.cols();
        out.rows = self.grid.rows();
        out.tile_size = TILE_SIZE;
        out.tiles.clear();
        out.tiles.extend_from_slice(self.grid.tiles());
        out.player = self.player.rect();
        out.player_cell = self.player.cell();
        out.player_direction = self.player.direction();
        out.enemies.clear();
        out.enemies.extend(self.enemies.iter().map(|e| e.rect()));
        out.bombs.clear();
        out.bombs
            .extend(self.bombs.iter().filter(|b| b.is_armed()).map(|b| b.rect()));
        out.blasts.clear();
        out.blasts
            .extend(self.bombs.iter().filter_map(|b| b.active_blast()));
        out.phase = self.phase;
        out.mode = self.mode;
        out.level = self.level;
        out.fruit_count = self.fruit_count;
        out.round_end = self.round_end;
        out.flash = self.flash;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
