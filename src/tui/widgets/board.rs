// Board widget: the category/clue grid.
//
// One column per category with its title in the header row, one body row per
// clue. Cell text follows the clue's reveal state (placeholder, question,
// answer); the cursor cell is highlighted. Long text truncates here and is
// shown in full by the clue panel.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::board::RevealState;
use crate::tui::layout::column_widths;
use crate::tui::ViewState;

/// Render the board grid into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(snapshot) = &state.board else {
        return;
    };

    let header = Row::new(
        snapshot
            .titles
            .iter()
            .map(|t| Cell::from(t.to_uppercase()))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = snapshot
        .cells
        .iter()
        .enumerate()
        .map(|(row_idx, cells)| {
            Row::new(
                cells
                    .iter()
                    .enumerate()
                    .map(|(col_idx, cell)| {
                        Cell::from(cell.text.clone())
                            .style(cell_style(cell.reveal, state.cursor == (col_idx, row_idx)))
                    })
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    let inner_width = area.width.saturating_sub(2);
    let widths: Vec<Constraint> = column_widths(inner_width, snapshot.columns())
        .into_iter()
        .map(Constraint::Length)
        .collect();

    let title = format!(
        "Board ({} categories x {} clues)",
        snapshot.columns(),
        snapshot.rows()
    );

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(0)
        .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}

fn cell_style(reveal: RevealState, is_cursor: bool) -> Style {
    let style = match reveal {
        RevealState::Hidden => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        RevealState::Question => Style::default().fg(Color::White),
        RevealState::Answer => Style::default().fg(Color::Green),
    };
    if is_cursor {
        style.bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
