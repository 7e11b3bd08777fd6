//! Error types for the engine

use thiserror::Error;

/// Main error type for the crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: ({row}, {col}) is occupied or out of bounds")]
    InvalidMove { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid mark counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidMarkCounts { x_count: usize, o_count: usize },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
