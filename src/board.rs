// Board model: categories, clues, and the reveal state machine.
//
// The board owns its cells directly as a column-major list of categories,
// each holding a fixed number of clues. Cells are addressed by
// (column index, row index); there is no lookup by title, which the API does
// not guarantee to be unique.

use crate::api::CategoryDetail;
use crate::protocol::{BoardSnapshot, CellView};

/// Placeholder glyph shown for a clue that has not been revealed yet.
pub const PLACEHOLDER: &str = "?";

// ---------------------------------------------------------------------------
// RevealState
// ---------------------------------------------------------------------------

/// Display progression of a single clue.
///
/// Only ever advances Hidden -> Question -> Answer; Answer is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Nothing shown yet (placeholder glyph).
    Hidden,
    /// The question text is shown.
    Question,
    /// The answer text is shown. Further activation is a no-op.
    Answer,
}

// ---------------------------------------------------------------------------
// Clue and Category
// ---------------------------------------------------------------------------

/// A single question/answer pair with its reveal state.
///
/// `reveal` is the only mutable field in the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    pub reveal: RevealState,
}

impl Clue {
    /// The text a board cell currently displays for this clue.
    pub fn display_text(&self) -> &str {
        match self.reveal {
            RevealState::Hidden => PLACEHOLDER,
            RevealState::Question => &self.question,
            RevealState::Answer => &self.answer,
        }
    }

    fn view(&self) -> CellView {
        CellView {
            text: self.display_text().to_string(),
            reveal: self.reveal,
        }
    }
}

/// A titled, ordered group of clues; one board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}

impl Category {
    /// Build a category from an API detail response.
    ///
    /// Returns `None` when the response carries fewer than
    /// `clues_per_category` clues; such categories are skipped at load time
    /// rather than padded. Extra clues beyond the configured count are
    /// truncated.
    pub fn from_detail(detail: CategoryDetail, clues_per_category: usize) -> Option<Category> {
        if detail.clues.len() < clues_per_category {
            return None;
        }
        let clues = detail
            .clues
            .into_iter()
            .take(clues_per_category)
            .map(|c| Clue {
                question: c.question,
                answer: c.answer,
                reveal: RevealState::Hidden,
            })
            .collect();
        Some(Category {
            title: detail.title,
            clues,
        })
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// The rendered grid of categories x clue rows for one game session.
///
/// Rebuilt from scratch on every (re)start; never mutated incrementally
/// across loads.
#[derive(Debug)]
pub struct Board {
    categories: Vec<Category>,
    rows: usize,
}

impl Board {
    /// Create a board from loaded categories. Every category is expected to
    /// hold exactly `clues_per_category` clues (`Category::from_detail`
    /// guarantees this at load time).
    pub fn new(categories: Vec<Category>, clues_per_category: usize) -> Board {
        debug_assert!(categories
            .iter()
            .all(|c| c.clues.len() == clues_per_category));
        Board {
            categories,
            rows: clues_per_category,
        }
    }

    pub fn columns(&self) -> usize {
        self.categories.len()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Activate the cell at (column, row): advance its clue's reveal state
    /// and return the new cell view.
    ///
    /// Returns `None` when the cell is out of bounds or its clue is already
    /// showing the answer; in both cases nothing changes.
    pub fn activate(&mut self, col: usize, row: usize) -> Option<CellView> {
        let clue = self.categories.get_mut(col)?.clues.get_mut(row)?;
        match clue.reveal {
            RevealState::Hidden => clue.reveal = RevealState::Question,
            RevealState::Question => clue.reveal = RevealState::Answer,
            RevealState::Answer => return None,
        }
        Some(clue.view())
    }

    /// Snapshot the board for rendering: one title per category, and
    /// rows x columns cell views (`cells[row][col]`).
    pub fn snapshot(&self) -> BoardSnapshot {
        let titles = self.categories.iter().map(|c| c.title.clone()).collect();
        let cells = (0..self.rows)
            .map(|row| {
                self.categories
                    .iter()
                    .map(|cat| cat.clues[row].view())
                    .collect()
            })
            .collect();
        BoardSnapshot { titles, cells }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
