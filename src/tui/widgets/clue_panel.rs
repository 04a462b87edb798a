// Clue panel: full text of the cursor cell's clue.
//
// Board cells truncate to their column width; this panel shows the cursor
// cell's currently revealed text in full, wrapped. It never shows more than
// the cell itself does, so an unrevealed answer stays unrevealed.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::board::RevealState;
use crate::tui::{Phase, ViewState};

/// Render the clue panel into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (title, text, style) = panel_content(state);

    let paragraph = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(paragraph, area);
}

/// Title, body, and style for the panel given the current view state.
fn panel_content(state: &ViewState) -> (String, String, Style) {
    let empty = || {
        (
            "Clue".to_string(),
            "--".to_string(),
            Style::default().fg(Color::DarkGray),
        )
    };

    if state.phase != Phase::Ready {
        return empty();
    }
    let Some(board) = &state.board else {
        return empty();
    };

    let (col, row) = state.cursor;
    let Some(cell) = board.cells.get(row).and_then(|r| r.get(col)) else {
        return empty();
    };

    let category = board.titles.get(col).cloned().unwrap_or_default();
    let title = format!("Clue: {} / row {}", category, row + 1);

    match cell.reveal {
        RevealState::Hidden => (
            title,
            "Press Enter or click to reveal this clue.".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        RevealState::Question => (title, cell.text.clone(), Style::default().fg(Color::White)),
        RevealState::Answer => (title, cell.text.clone(), Style::default().fg(Color::Green)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{BoardSnapshot, CellView};

    fn ready_state() -> ViewState {
        let mut state = ViewState::default();
        state.phase = Phase::Ready;
        state.board = Some(BoardSnapshot {
            titles: vec!["SCIENCE".into(), "HISTORY".into()],
            cells: vec![vec![
                CellView {
                    text: "?".into(),
                    reveal: RevealState::Hidden,
                },
                CellView {
                    text: "Who wrote Hamlet?".into(),
                    reveal: RevealState::Question,
                },
            ]],
        });
        state
    }

    #[test]
    fn hidden_cell_shows_reveal_hint() {
        let state = ready_state();
        let (title, text, _) = panel_content(&state);
        assert!(text.contains("reveal"));
        assert!(title.contains("SCIENCE"));
    }

    #[test]
    fn revealed_cell_shows_full_text_and_category() {
        let mut state = ready_state();
        state.cursor = (1, 0);
        let (title, text, _) = panel_content(&state);
        assert_eq!(text, "Who wrote Hamlet?");
        assert!(title.contains("HISTORY"));
    }

    #[test]
    fn loading_phase_shows_placeholder() {
        let state = ViewState::default();
        let (_, text, _) = panel_content(&state);
        assert_eq!(text, "--");
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(80, 24);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ready_state();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
