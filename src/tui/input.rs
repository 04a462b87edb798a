// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// session controller, or into local ViewState mutations (cursor movement).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{Phase, ViewState};
use crate::protocol::UserCommand;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// session controller (activate, restart, quit). Returns `None` when the key
/// press was handled locally by mutating `ViewState` (cursor movement) or is
/// ignored.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress; ignoring
    // non-Press events prevents double-processing.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately (escape hatch)
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UserCommand::Quit),
        KeyCode::Char('r') => Some(UserCommand::Restart),

        // Cursor movement, clamped to the board dimensions.
        KeyCode::Left | KeyCode::Char('h') => {
            move_cursor(view_state, -1, 0);
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            move_cursor(view_state, 1, 0);
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            move_cursor(view_state, 0, -1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_cursor(view_state, 0, 1);
            None
        }

        // Activate the cursor cell.
        KeyCode::Enter | KeyCode::Char(' ') => {
            if view_state.phase == Phase::Ready {
                let (col, row) = view_state.cursor;
                Some(UserCommand::Activate { col, row })
            } else {
                None
            }
        }

        _ => None,
    }
}

fn move_cursor(view_state: &mut ViewState, dx: isize, dy: isize) {
    let Some(board) = &view_state.board else {
        return;
    };
    if board.columns() == 0 || board.rows() == 0 {
        return;
    }

    let (col, row) = view_state.cursor;
    let col = col
        .saturating_add_signed(dx)
        .min(board.columns() - 1);
    let row = row
        .saturating_add_signed(dy)
        .min(board.rows() - 1);
    view_state.cursor = (col, row);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::RevealState;
    use crate::protocol::{BoardSnapshot, CellView};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ready_state(columns: usize, rows: usize) -> ViewState {
        let mut state = ViewState::default();
        state.phase = Phase::Ready;
        state.board = Some(BoardSnapshot {
            titles: (0..columns).map(|i| format!("CAT {i}")).collect(),
            cells: (0..rows)
                .map(|_| {
                    (0..columns)
                        .map(|_| CellView {
                            text: "?".into(),
                            reveal: RevealState::Hidden,
                        })
                        .collect()
                })
                .collect(),
        });
        state
    }

    #[test]
    fn q_and_esc_quit() {
        let mut state = ready_state(2, 5);
        assert_eq!(
            handle_key(press(KeyCode::Char('q')), &mut state),
            Some(UserCommand::Quit)
        );
        assert_eq!(
            handle_key(press(KeyCode::Esc), &mut state),
            Some(UserCommand::Quit)
        );
    }

    #[test]
    fn ctrl_c_quits() {
        let mut state = ready_state(2, 5);
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(event, &mut state), Some(UserCommand::Quit));
    }

    #[test]
    fn r_restarts() {
        let mut state = ready_state(2, 5);
        assert_eq!(
            handle_key(press(KeyCode::Char('r')), &mut state),
            Some(UserCommand::Restart)
        );
    }

    #[test]
    fn arrows_move_cursor_clamped() {
        let mut state = ready_state(2, 5);
        assert_eq!(state.cursor, (0, 0));

        // Moving past the left/top edge stays put.
        assert_eq!(handle_key(press(KeyCode::Left), &mut state), None);
        assert_eq!(handle_key(press(KeyCode::Up), &mut state), None);
        assert_eq!(state.cursor, (0, 0));

        handle_key(press(KeyCode::Right), &mut state);
        handle_key(press(KeyCode::Down), &mut state);
        assert_eq!(state.cursor, (1, 1));

        // Clamped at the right edge.
        handle_key(press(KeyCode::Right), &mut state);
        assert_eq!(state.cursor, (1, 1));

        // vim keys work too.
        handle_key(press(KeyCode::Char('j')), &mut state);
        assert_eq!(state.cursor, (1, 2));
        handle_key(press(KeyCode::Char('h')), &mut state);
        assert_eq!(state.cursor, (0, 2));
    }

    #[test]
    fn cursor_does_not_move_without_board() {
        let mut state = ViewState::default();
        handle_key(press(KeyCode::Right), &mut state);
        assert_eq!(state.cursor, (0, 0));
    }

    #[test]
    fn enter_activates_cursor_cell_when_ready() {
        let mut state = ready_state(3, 5);
        state.cursor = (2, 4);
        assert_eq!(
            handle_key(press(KeyCode::Enter), &mut state),
            Some(UserCommand::Activate { col: 2, row: 4 })
        );
        assert_eq!(
            handle_key(press(KeyCode::Char(' ')), &mut state),
            Some(UserCommand::Activate { col: 2, row: 4 })
        );
    }

    #[test]
    fn enter_is_ignored_while_loading_or_failed() {
        let mut state = ViewState::default();
        assert_eq!(state.phase, Phase::Loading);
        assert_eq!(handle_key(press(KeyCode::Enter), &mut state), None);

        state.phase = Phase::Failed("boom".into());
        assert_eq!(handle_key(press(KeyCode::Enter), &mut state), None);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = ready_state(2, 5);
        let mut event = press(KeyCode::Char('q'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handle_key(event, &mut state), None);
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut state = ready_state(2, 5);
        assert_eq!(handle_key(press(KeyCode::Char('x')), &mut state), None);
        assert_eq!(handle_key(press(KeyCode::Tab), &mut state), None);
    }
}
