//! Session configuration.

use std::path::PathBuf;

use crate::types::{GameMode, DEFAULT_MAX_FPS, ROUND_OVER_DELAY_MS};

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub mode: GameMode,
    /// Pause between the end of a round and the next `NewGame`.
    pub round_over_delay_ms: u32,
    /// Soft frame cap; `0` disables pacing.
    pub max_fps: f64,
    pub log_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            round_over_delay_ms: ROUND_OVER_DELAY_MS,
            max_fps: DEFAULT_MAX_FPS,
            log_path: default_log_path(),
        }
    }
}

impl GameConfig {
    /// Read overrides from `PACBOMB_*` environment variables.
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        use std::env;

        let mode = env::var("PACBOMB_MODE")
            .ok()
            .and_then(|s| GameMode::from_str(&s))
            .unwrap_or_default();

        let round_over_delay_ms = env::var("PACBOMB_ROUND_DELAY_MS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(ROUND_OVER_DELAY_MS);

        let max_fps = env::var("PACBOMB_MAX_FPS")
            .ok()
            .and_then(|s| s.trim().parse::<f64>().ok())
            .filter(|fps| fps.is_finite() && *fps >= 0.0)
            .unwrap_or(DEFAULT_MAX_FPS);

        let log_path = env::var("PACBOMB_LOG_PATH")
            .ok()
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(PathBuf::from(s)) })
            .unwrap_or_else(default_log_path);

        Self {
            mode,
            round_over_delay_ms,
            max_fps,
            log_path,
        }
    }

    pub fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_round_over_delay_ms(mut self, ms: u32) -> Self {
        self.round_over_delay_ms = ms;
        self
    }
}

fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("tui-pacbomb.log")
}
