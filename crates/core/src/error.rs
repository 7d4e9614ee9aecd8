//! Error types for game construction.

use thiserror::Error;

/// Errors raised when a game cannot be created.
///
/// Moves and spawns never fail; only configuration is validated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("board size must be at least 1, got {0}")]
    InvalidSize(usize),
}
