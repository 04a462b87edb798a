// TUI: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the session state. The session
// controller pushes `UiUpdate` messages over an mpsc channel; the TUI applies
// them to `ViewState` and re-renders at ~30 fps. User input is translated
// into `UserCommand` messages sent back to the session controller.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures_util::StreamExt;
use ratatui::layout::Rect;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::protocol::{BoardSnapshot, UiUpdate, UserCommand};

use layout::{board_hit_test, build_layout};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Which view the board zone is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// A load is in flight; the loading view is shown.
    Loading,
    /// A board is rendered and interactive.
    Ready,
    /// The last load failed; the error view is shown.
    Failed(String),
}

/// TUI-local state that mirrors the session state for rendering.
///
/// Updated incrementally via `UiUpdate` messages from the session controller.
/// The `render_frame` function reads this struct to draw the screen.
pub struct ViewState {
    pub phase: Phase,
    /// The rendered board, present only in `Phase::Ready`.
    pub board: Option<BoardSnapshot>,
    /// Cursor cell as (column, row).
    pub cursor: (usize, usize),
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            phase: Phase::Loading,
            board: None,
            cursor: (0, 0),
        }
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::Loading => {
            state.phase = Phase::Loading;
            state.board = None;
            state.cursor = (0, 0);
        }
        UiUpdate::BoardReady(snapshot) => {
            state.phase = Phase::Ready;
            state.board = Some(*snapshot);
            state.cursor = (0, 0);
        }
        UiUpdate::LoadFailed(message) => {
            state.phase = Phase::Failed(message);
            state.board = None;
            state.cursor = (0, 0);
        }
        UiUpdate::CellRevealed { col, row, cell } => {
            if let Some(board) = &mut state.board {
                if let Some(slot) = board.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
                    *slot = cell;
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state);
    match state.phase {
        Phase::Ready => widgets::board::render(frame, layout.board, state),
        _ => widgets::message::render(frame, layout.board, state),
    }
    widgets::clue_panel::render(frame, layout.clue_panel, state);
    widgets::help_bar::render(frame, layout.help_bar);
}

// ---------------------------------------------------------------------------
// Mouse handling
// ---------------------------------------------------------------------------

/// Translate a mouse event into a command, using the board geometry of the
/// most recently rendered frame.
fn handle_mouse(
    mouse: MouseEvent,
    view_state: &mut ViewState,
    frame_area: Rect,
) -> Option<UserCommand> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    if view_state.phase != Phase::Ready {
        return None;
    }
    let board = view_state.board.as_ref()?;

    let layout = build_layout(frame_area);
    let (col, row) = board_hit_test(
        layout.board,
        board.columns(),
        board.rows(),
        mouse.column,
        mouse.row,
    )?;

    view_state.cursor = (col, row);
    Some(UserCommand::Activate { col, row })
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// This is the main entry point for the terminal UI. It:
/// 1. Initializes the terminal (raw mode, alternate screen, mouse capture).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, input events, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    // 1. Initialize terminal
    let mut terminal = ratatui::init();
    crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;

    // 2. Set panic hook to restore the terminal on crash.
    //    We capture the original hook and chain ours before it.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    // 3. Create ViewState
    let mut view_state = ViewState::default();

    // 4. Create crossterm EventStream for async input
    let mut event_stream = EventStream::new();

    // 5. Create render interval (~30fps)
    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    // Geometry of the last rendered frame, for mouse hit-testing.
    let mut frame_area = Rect::default();

    // 6. Main loop
    loop {
        tokio::select! {
            // UI updates from the session controller
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => {
                        apply_ui_update(&mut view_state, ui_update);
                    }
                    None => {
                        // Channel closed: session is shutting down
                        break;
                    }
                }
            }

            // Keyboard and mouse input
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let _ = cmd_tx.send(cmd).await;
                            if cmd == UserCommand::Quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(Event::Mouse(mouse_event))) => {
                        if let Some(cmd) =
                            handle_mouse(mouse_event, &mut view_state, frame_area)
                        {
                            let _ = cmd_tx.send(cmd).await;
                        }
                    }
                    Some(Ok(_)) => {
                        // Resize, focus, paste events -- the next tick redraws
                    }
                    Some(Err(_)) => {
                        // Input error -- break out
                        break;
                    }
                    None => {
                        // Stream ended
                        break;
                    }
                }
            }

            // Render tick
            _ = render_tick.tick() => {
                terminal.draw(|frame| {
                    frame_area = frame.area();
                    render_frame(frame, &view_state);
                })?;
            }
        }
    }

    // 7. Restore terminal
    let _ = crossterm::execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
