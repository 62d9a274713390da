// format.rs - Reading and writing the plain-text gamestate file
//
// Load file layout (written by the terminal simulator before it launches the editor):
//
//   0110...      <- `rows` lines, at least `cols` chars each, '1' = alive
//   ...
//   <cols + 2>   <- two size lines, padded by the simulator's dead border
//   <rows + 2>
//
// The saved file is the grid lines only, no size lines.

use std::fs;
use std::path::Path;

use log::{debug, info};

use crate::error::{BoardError, Result};
use crate::grid::{Board, LIVE_CHAR, TRow};

/// Border the simulator keeps around the playing area, counted on both sides.
pub const BORDER_PADDING: i64 = 2;

/// Which of the two trailing size lines carries the column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetadataOrder {
    /// Second-to-last line is `cols + 2`, last line is `rows + 2`.
    #[default]
    ColsThenRows,
    /// Second-to-last line is `rows + 2`, last line is `cols + 2`.
    RowsThenCols,
}

impl MetadataOrder {
    /// Splits the two trailing values into `(cols_raw, rows_raw)`.
    fn split(self, second_to_last: i64, last: i64) -> (i64, i64) {
        match self {
            MetadataOrder::ColsThenRows => (second_to_last, last),
            MetadataOrder::RowsThenCols => (last, second_to_last),
        }
    }
}

/// Loads a board using the default size-line order.
pub fn load(path: impl AsRef<Path>) -> Result<Board> {
    load_with(path, MetadataOrder::default())
}

pub fn load_with(path: impl AsRef<Path>, order: MetadataOrder) -> Result<Board> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| BoardError::malformed(path, format!("cannot read file: {e}")))?;
    let board = parse_from(&text, order, path)?;
    info!("Loaded {}x{} board from {:?}", board.rows(), board.cols(), path);
    Ok(board)
}

/// Parses load-file text already in memory.
pub fn parse(text: &str, order: MetadataOrder) -> Result<Board> {
    parse_from(text, order, Path::new("<memory>"))
}

/// Overwrites `path` with the grid lines of `board`.
pub fn save(path: impl AsRef<Path>, board: &Board) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, board.to_grid_text())
        .map_err(|source| BoardError::Io { path: path.to_path_buf(), source })?;
    info!(
        "Saved {}x{} board ({} alive) to {:?}",
        board.rows(),
        board.cols(),
        board.population(),
        path
    );
    Ok(())
}

fn parse_from(text: &str, order: MetadataOrder, path: &Path) -> Result<Board> {
    let mut lines: Vec<&str> = text.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let [.., second_to_last, last] = lines[..] else {
        return Err(BoardError::malformed(path, "missing the two trailing size lines"));
    };
    let (cols_raw, rows_raw) = order.split(
        parse_size_line(second_to_last, path)?,
        parse_size_line(last, path)?,
    );

    let rows = rows_raw.saturating_sub(BORDER_PADDING);
    let cols = cols_raw.saturating_sub(BORDER_PADDING);
    if rows <= 0 || cols <= 0 {
        return Err(BoardError::Dimension { rows, cols });
    }
    debug!("Size lines give rows_raw={rows_raw} cols_raw={cols_raw} -> {rows}x{cols}");

    let grid_lines = lines.len() as i64 - 2;
    if grid_lines < rows {
        return Err(BoardError::malformed(
            path,
            format!("expected {rows} grid lines before the size lines, found {grid_lines}"),
        ));
    }

    let (rows, cols) = (rows as usize, cols as usize);
    let mut cells: Vec<TRow> = Vec::with_capacity(rows);
    for (row, line) in lines[..rows].iter().enumerate() {
        let cells_in_row: TRow = line.chars().take(cols).map(|ch| ch == LIVE_CHAR).collect();
        if cells_in_row.len() < cols {
            return Err(BoardError::malformed(
                path,
                format!("row {row} has {} cells, expected {cols}", cells_in_row.len()),
            ));
        }
        cells.push(cells_in_row);
    }

    Ok(Board::from_rows(rows, cols, cells))
}

fn parse_size_line(line: &str, path: &Path) -> Result<i64> {
    line.trim()
        .parse()
        .map_err(|_| BoardError::malformed(path, format!("size line {line:?} is not an integer")))
}

impl Board {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load(path)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save(path, self)
    }

    /// Grid lines followed by both padded size lines, in the layout the
    /// simulator writes before handing the file to the editor.
    pub fn to_padded_text(&self, order: MetadataOrder) -> String {
        let cols_raw = self.cols() as i64 + BORDER_PADDING;
        let rows_raw = self.rows() as i64 + BORDER_PADDING;
        let (first, second) = match order {
            MetadataOrder::ColsThenRows => (cols_raw, rows_raw),
            MetadataOrder::RowsThenCols => (rows_raw, cols_raw),
        };
        format!("{}{first}\n{second}", self.to_grid_text())
    }
}
