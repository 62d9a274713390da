// grid.rs - Board type for the gamestate editor

use std::fmt;

use crate::error::{BoardError, Result};

pub const DEAD_CHAR: char = '0';
pub const LIVE_CHAR: char = '1';

pub type TRow = Vec<bool>;

/// Rectangular grid of dead/alive cells. Every row holds exactly `cols` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<TRow>,
}

impl Board {
    /// All-dead board of the given size.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::Dimension { rows: rows as i64, cols: cols as i64 });
        }
        Ok(Self { rows, cols, cells: vec![vec![false; cols]; rows] })
    }

    /// Builds a board from already-parsed rows. Rows must all be `cols` long.
    pub(crate) fn from_rows(rows: usize, cols: usize, cells: Vec<TRow>) -> Self {
        debug_assert_eq!(cells.len(), rows);
        debug_assert!(cells.iter().all(|row| row.len() == cols));
        Self { rows, cols, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Flips a single cell between dead and alive.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<()> {
        self.check_bounds(row, col)?;
        self.cells[row][col] = !self.cells[row][col];
        Ok(())
    }

    /// Kills every cell, keeping the size.
    pub fn clear(&mut self) {
        for row in &mut self.cells {
            row.fill(false);
        }
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().map(|row| row.iter().filter(|&&alive| alive).count()).sum()
    }

    /// Rows in order, each a slice of `cols` cells.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        self.cells.iter().map(Vec::as_slice)
    }

    /// The saved form: one line of '0'/'1' per row, each ended by '\n'.
    pub fn to_grid_text(&self) -> String {
        self.to_string()
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds { row, col, rows: self.rows, cols: self.cols });
        }
        Ok(())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for &alive in row {
                write!(f, "{}", if alive { LIVE_CHAR } else { DEAD_CHAR })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Boards of 1..max rows and columns with random cells.
#[cfg(test)]
pub(crate) fn arb_board(max: usize) -> impl proptest::strategy::Strategy<Value = Board> {
    use proptest::prelude::*;

    (1..max, 1..max).prop_flat_map(|(rows, cols)| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), cols), rows)
            .prop_map(move |cells| Board::from_rows(rows, cols, cells))
    })
}
