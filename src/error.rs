//! Error types for the engine facade, configuration and text notation
//!
//! Move legality is never reported through these types: an illegal move is a
//! [`crate::rules::MoveStatus`] value, not an error.

use crate::board::Stone;

/// Rejected engine configuration
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("board size {0} is outside the supported range 5..=19")]
    BoardSize(usize),
    #[error("max depth must be at least 1")]
    ZeroDepth,
    #[error("{0} width must be at least 1")]
    ZeroWidth(&'static str),
    #[error("transposition table size must be at least 1 MB")]
    ZeroTableSize,
}

/// Rejected input at the engine facade
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("the engine must play black or white, not {0:?}")]
    InvalidSide(Stone),
    #[error("board array has {actual} cells, expected {expected}")]
    BoardLength { expected: usize, actual: usize },
    #[error("invalid cell code {code} at index {index}")]
    InvalidCell { index: usize, code: u8 },
    #[error("capture count {0} is not an even number")]
    InvalidCaptureCount(u32),
    #[error("({row}, {col}) is outside the board")]
    OutOfBounds { row: i32, col: i32 },
    #[error("({row}, {col}) is already occupied")]
    Occupied { row: i32, col: i32 },
    #[error("no move to undo")]
    NothingToUndo,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Failure parsing a text board diagram
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("diagram contains no board rows")]
    Empty,
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("diagram has {0} rows but rows are {1} cells wide")]
    NotSquare(usize, usize),
    #[error("unknown cell character '{0}'")]
    InvalidChar(char),
    #[error("malformed captures line: {0}")]
    Captures(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
