// Loading and error views, shown in the board zone while no board is
// rendered.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::tui::{Phase, ViewState};

/// Render the loading or error view into the board zone.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let (text, style) = match &state.phase {
        Phase::Loading => (
            "Loading categories...".to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Phase::Failed(message) => (
            format!("Load failed: {message}\n\nPress r to retry."),
            Style::default().fg(Color::Red),
        ),
        Phase::Ready => return,
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Board"));
    frame.render_widget(paragraph, area);
}
