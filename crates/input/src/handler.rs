//! Held-key tracking for terminal environments.
//!
//! Many terminals never report key releases. Until a real release event has
//! been seen, a movement key counts as released once no press or auto-repeat
//! for it has arrived within the release timeout, and the handler synthesizes
//! the matching `KeyUp`.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{handle_key_event, movement_key};
use crate::types::{Direction, InputEvent};

// Above the common auto-repeat delays (X11 defaults to 660 ms), so a held key
// keeps refreshing itself before it times out.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 750;

#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Held movement keys and when each was last pressed or repeated.
    held: ArrayVec<(Direction, Instant), 4>,
    release_events_seen: bool,
    key_release_timeout: Duration,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            release_events_seen: false,
            key_release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.key_release_timeout = Duration::from_millis(timeout_ms);
        self
    }

    pub fn key_release_timeout(&self) -> Duration {
        self.key_release_timeout
    }

    /// True once the terminal has sent a real key-release event.
    pub fn release_events_seen(&self) -> bool {
        self.release_events_seen
    }

    pub fn held(&self) -> impl Iterator<Item = Direction> + '_ {
        self.held.iter().map(|(d, _)| *d)
    }

    /// Translate a terminal key event, recording held movement keys.
    pub fn handle_key_event(&mut self, key: KeyEvent, now: Instant) -> Option<InputEvent> {
        if key.kind == KeyEventKind::Release {
            self.release_events_seen = true;
        }

        if let Some(direction) = movement_key(key.code) {
            let pos = self.held.iter().position(|(d, _)| *d == direction);
            match (key.kind, pos) {
                (KeyEventKind::Release, Some(i)) => {
                    self.held.remove(i);
                }
                (KeyEventKind::Release, None) => {}
                (_, Some(i)) => self.held[i].1 = now,
                (_, None) => {
                    let _ = self.held.try_push((direction, now));
                }
            }
        }

        handle_key_event(key)
    }

    /// Synthesize releases for keys that timed out.
    pub fn update(&mut self, now: Instant) -> ArrayVec<InputEvent, 4> {
        let mut released = ArrayVec::<InputEvent, 4>::new();
        if self.release_events_seen {
            return released;
        }

        let timeout = self.key_release_timeout;
        self.held.retain(|(direction, last)| {
            if now.saturating_duration_since(*last) > timeout {
                let _ = released.try_push(InputEvent::KeyUp(*direction));
                false
            } else {
                true
            }
        });
        released
    }

    /// Forget every held key (used when a new round starts).
    pub fn reset(&mut self) {
        self.held.clear();
    }
}
