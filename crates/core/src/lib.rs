//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the rules, state management and simulation of the
//! game. It has **no dependencies** on terminals, input devices or wall clocks:
//!
//! - **Deterministic**: elapsed time is passed in, randomness is injected
//!   through [`RandomSource`]
//! - **Testable**: scripted random values and synthetic `dt` drive every rule
//! - **Portable**: the same [`Game`] runs under the terminal front end or headless
//!
//! # Module Structure
//!
//! - [`grid`]: tile matrix, wall queries, fruit placement and cell resolution
//! - [`motion`]: [`Mover`], the one motion model shared by every entity
//! - [`turns`]: held keys and the turn queue
//! - [`player`], [`enemy`], [`bomb`]: the three kinds of moving entity
//! - [`game`]: round state machine and per-frame orchestration
//! - [`snapshot`]: renderer-facing copy of the game state
//! - [`rng`]: uniform index sources (OS-seeded and scripted)
//! - [`config`]: environment-driven session settings
//!
//! # Example
//!
//! ```
//! use tui_pacbomb_core::{Game, GameConfig, Grid, Phase, ScriptedRng};
//! use tui_pacbomb_types::{Direction, GameMode, InputEvent};
//!
//! let config = GameConfig::default().with_mode(GameMode::Classic);
//! let mut game = Game::with_parts(&config, Grid::standard().unwrap(), ScriptedRng::new([]));
//!
//! // A held movement key starts the round
//! game.handle(InputEvent::KeyDown(Direction::Right));
//! assert_eq!(game.tick(1.0 / 60.0), Phase::PlayGame);
//!
//! // First frame of play primes the player, the next one moves it
//! game.tick(1.0 / 60.0);
//! game.tick(0.1);
//! assert!(game.player().offset() > 0.0);
//! ```
//!
//! # Timing
//!
//! Speeds are in length units per second and [`Game::tick`] takes seconds. The
//! caller measures one `dt` per frame; movement is clamped to
//! [`MAX_FRAME_SECS`](types::MAX_FRAME_SECS) per tick so a stalled frame cannot
//! carry an entity through a wall.

pub mod bomb;
pub mod config;
pub mod enemy;
pub mod error;
pub mod game;
pub mod grid;
pub mod motion;
pub mod player;
pub mod rng;
pub mod snapshot;
pub mod turns;

pub use tui_pacbomb_types as types;

// Re-export commonly used types for convenience
pub use bomb::{Bomb, BombEvent, BombPhase};
pub use config::GameConfig;
pub use enemy::Enemy;
pub use error::CoreError;
pub use game::{Game, Phase, RoundEnd};
pub use grid::{Grid, Resolution};
pub use motion::{BoundaryRule, Mover, Step};
pub use player::Player;
pub use rng::{RandomSource, ScriptedRng, SecureRng};
pub use snapshot::GameSnapshot;
pub use turns::TurnBuffer;
