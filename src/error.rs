use std::path::PathBuf;
use thiserror::Error;

/// Precondition violations reported by `LabeledGraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("graph is full: capacity of {capacity} vertices reached")]
    CapacityExceeded { capacity: usize },

    #[error("vertex {index} out of range for graph of size {size}")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Errors from loading word lists and solving puzzles over them.
#[derive(Debug, Error)]
pub enum DoubletError {
    #[error("can't read word list {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed word list: {0}")]
    Csv(#[from] csv::Error),

    #[error("word not in dictionary: {0}")]
    UnknownWord(String),

    #[error("word {word:?} does not have {expected} letters")]
    LengthMismatch { word: String, expected: usize },

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type Result<T, E = DoubletError> = std::result::Result<T, E>;
