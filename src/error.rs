//! Error types for the move engine.

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T, E = CubeError> = std::result::Result<T, E>;

/// Errors surfaced at the engine boundary.
///
/// None of these leave the engine in a modified state; the caller can simply
/// try again with different input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CubeError {
    /// The move identifier is not one of `R`, `L`, `U`, `D`, `F`, `B`.
    #[error("invalid move kind `{0}`: expected one of R, L, U, D, F, B")]
    InvalidMoveKind(String),
    /// The per-tick animation step is not in `[MIN_STEP, PI/2]`.
    #[error("invalid animation step {0}: must be at least PI/200000 and at most PI/2")]
    InvalidStep(f32),
}
