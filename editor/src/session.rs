// session.rs - The board being edited and how the editing session ends

use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use gol_board::Board;
use log::{debug, error};

/// How the session finished, read by `main` once the window is gone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionOutcome {
    #[default]
    Pending,
    Saved,
}

/// Owns the board for the lifetime of the window. Cell clicks and the
/// save control both go through here, one event at a time.
pub struct EditorSession {
    board: Board,
    output: PathBuf,
    outcome: Rc<Cell<SessionOutcome>>,
    last_error: Option<String>,
}

impl EditorSession {
    pub fn new(board: Board, output: impl Into<PathBuf>) -> Self {
        Self {
            board,
            output: output.into(),
            outcome: Rc::new(Cell::new(SessionOutcome::Pending)),
            last_error: None,
        }
    }

    /// Shared view of the outcome; stays valid after the app is dropped.
    pub fn outcome_handle(&self) -> Rc<Cell<SessionOutcome>> {
        Rc::clone(&self.outcome)
    }

    pub fn outcome(&self) -> SessionOutcome {
        self.outcome.get()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Message from the last failed save, cleared by the next successful one.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn toggle(&mut self, row: usize, col: usize) -> gol_board::Result<()> {
        self.board.toggle(row, col)?;
        debug!("Cell ({row}, {col}) -> {:?}", self.board.get(row, col));
        Ok(())
    }

    pub fn clear(&mut self) {
        self.board.clear();
        debug!("Board cleared");
    }

    /// Writes the board out. On success the session is finished and the
    /// shell is expected to close; on failure it stays open for a retry.
    pub fn save(&mut self) -> gol_board::Result<()> {
        match self.board.save(&self.output) {
            Ok(()) => {
                self.last_error = None;
                self.outcome.set(SessionOutcome::Saved);
                Ok(())
            }
            Err(e) => {
                error!("Save failed: {e}");
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }
}
