//! Errors raised by the simulation.

/// Failures the simulation cannot recover from on its own.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("secure random source unavailable: {0}")]
    Entropy(String),
    #[error("invalid layout at row {row}, col {col}: {reason}")]
    Layout {
        row: usize,
        col: usize,
        reason: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, CoreError>;
