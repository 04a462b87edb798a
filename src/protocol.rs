// Message types exchanged between the session controller and the TUI.

use crate::api::FetchError;
use crate::board::{Category, RevealState};

// ---------------------------------------------------------------------------
// Board snapshots
// ---------------------------------------------------------------------------

/// What a single board cell currently displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    pub text: String,
    pub reveal: RevealState,
}

/// A render-ready copy of the board: one title per category column and
/// rows x columns cell views, addressed as `cells[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub titles: Vec<String>,
    pub cells: Vec<Vec<CellView>>,
}

impl BoardSnapshot {
    pub fn columns(&self) -> usize {
        self.titles.len()
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    /// Count of cells showing their answer and total cell count.
    pub fn answered_counts(&self) -> (usize, usize) {
        let answered = self
            .cells
            .iter()
            .flatten()
            .filter(|c| c.reveal == RevealState::Answer)
            .count();
        (answered, self.columns() * self.rows())
    }
}

// ---------------------------------------------------------------------------
// Commands and updates
// ---------------------------------------------------------------------------

/// User intent, sent from the TUI to the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    /// Activate the board cell at (column, row).
    Activate { col: usize, row: usize },
    /// Discard the current board and start a fresh load.
    Restart,
    /// Shut down.
    Quit,
}

/// State change, pushed from the session controller to the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiUpdate {
    /// A load is in flight; show the loading view.
    Loading,
    /// A load completed; replace the rendered board wholesale.
    BoardReady(Box<BoardSnapshot>),
    /// A load failed; show the error view with this message.
    LoadFailed(String),
    /// A single cell's clue advanced its reveal state.
    CellRevealed {
        col: usize,
        row: usize,
        cell: CellView,
    },
}

/// Completion report from a spawned load task.
#[derive(Debug)]
pub enum LoadEvent {
    Finished {
        /// The load generation this result belongs to. Results from a
        /// superseded generation are discarded.
        generation: u64,
        result: Result<Vec<Category>, FetchError>,
    },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
