//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::InputEvent`] and tracks held
//! movement keys, synthesizing key releases for terminals that never send them.

pub mod handler;
pub mod map;

pub use tui_pacbomb_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, movement_key, should_quit};
