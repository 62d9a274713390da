// error.rs - Failures raised while loading, editing or saving a board

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, BoardError>;

/// Every failure is fatal at the point it happens; nothing here is retried.
#[derive(thiserror::Error, Debug)]
pub enum BoardError {
    #[error("Malformed gamestate file {path:?}: {reason}")]
    MalformedFile { path: PathBuf, reason: String },

    #[error("Invalid board size {rows}x{cols} (both must be at least 1)")]
    Dimension { rows: i64, cols: i64 },

    #[error("Cell ({row}, {col}) is outside the {rows}x{cols} board")]
    OutOfBounds { row: usize, col: usize, rows: usize, cols: usize },

    #[error("Cannot write gamestate file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl BoardError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        BoardError::MalformedFile { path: path.into(), reason: reason.into() }
    }
}
