//! Board model for the Game of Life gamestate editor.
//!
//! A [`Board`] is loaded from the gamestate file the terminal simulator writes,
//! edited one cell at a time, and saved back as plain `0`/`1` rows.

mod error;
mod format;
mod grid;

pub use error::{BoardError, Result};
pub use format::{BORDER_PADDING, MetadataOrder, load, load_with, parse, save};
pub use grid::{Board, DEAD_CHAR, LIVE_CHAR, TRow};
