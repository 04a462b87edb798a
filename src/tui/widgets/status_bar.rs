// Status bar: load phase and reveal progress.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::{Phase, ViewState};

/// Render the status bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        status_text(state),
        Style::default().fg(Color::White),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

fn status_text(state: &ViewState) -> String {
    match &state.phase {
        Phase::Loading => " cluegrid | Loading...".to_string(),
        Phase::Failed(_) => " cluegrid | Load failed".to_string(),
        Phase::Ready => {
            let (answered, total) = state
                .board
                .as_ref()
                .map(|b| b.answered_counts())
                .unwrap_or((0, 0));
            format!(" cluegrid | Ready | Answered {answered}/{total}")
        }
    }
}
