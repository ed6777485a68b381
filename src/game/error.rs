use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the board, the tick engine and board I/O
#[derive(Debug, Error)]
pub enum GameError {
    #[error("cell ({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    #[error("malformed board in {source_name}: {reason}")]
    MalformedBoard { source_name: String, reason: String },

    #[error("snake chain starting at tail ({x}, {y}) does not reach a head: {reason}")]
    UnresolvedChain { x: i32, y: i32, reason: String },

    #[error("broken snake chain at ({x}, {y}): unexpected symbol {symbol:?}")]
    BrokenChain { x: i32, y: i32, symbol: char },

    #[error("invalid config in {source_name}: {reason}")]
    InvalidConfig { source_name: String, reason: String },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
