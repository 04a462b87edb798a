// Game session orchestration.
//
// The central event loop that coordinates board loads and user commands from
// the TUI. Owns the current board; loads replace it wholesale. Each load is
// tagged with a monotonically increasing generation so that a restart issued
// while a load is still in flight simply supersedes it: the late result is
// discarded when it arrives.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::api::ApiClient;
use crate::board::Board;
use crate::config::Config;
use crate::protocol::{LoadEvent, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// The complete session state, owned by the session task.
pub struct SessionState {
    pub config: Config,
    /// API client shared with spawned load tasks.
    pub api: Arc<ApiClient>,
    /// The current board, present only between a successful load and the
    /// next restart.
    pub board: Option<Board>,
    /// Generation of the most recently started load. Results carrying an
    /// older generation are discarded in `handle_load_event`.
    pub load_generation: u64,
    /// Sender for load completion events; spawned load tasks use a clone of
    /// this sender to report back to the session loop.
    pub load_tx: mpsc::Sender<LoadEvent>,
}

impl SessionState {
    pub fn new(config: Config, api: Arc<ApiClient>, load_tx: mpsc::Sender<LoadEvent>) -> Self {
        SessionState {
            config,
            api,
            board: None,
            load_generation: 0,
            load_tx,
        }
    }
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the session event loop.
///
/// Starts the initial board load immediately, then processes user commands
/// and load completions until the TUI drops its command sender or sends
/// `Quit`.
pub async fn run(
    mut state: SessionState,
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    mut load_rx: mpsc::Receiver<LoadEvent>,
    ui_tx: mpsc::Sender<UiUpdate>,
) -> anyhow::Result<()> {
    start_load(&mut state, &ui_tx).await;

    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(cmd) => {
                        if handle_command(&mut state, cmd, &ui_tx).await {
                            break;
                        }
                    }
                    None => {
                        // TUI hung up: shut down.
                        break;
                    }
                }
            }

            event = load_rx.recv() => {
                match event {
                    Some(event) => handle_load_event(&mut state, event, &ui_tx).await,
                    None => break,
                }
            }
        }
    }

    info!("session loop finished");
    Ok(())
}

/// Start a new board load: bump the generation, show the loading view, and
/// spawn the sequential fetch as its own task.
///
/// An in-flight load is not cancelled; its result will carry a stale
/// generation and be dropped on arrival.
pub async fn start_load(state: &mut SessionState, ui_tx: &mpsc::Sender<UiUpdate>) {
    state.load_generation += 1;
    let generation = state.load_generation;
    state.board = None;

    let _ = ui_tx.send(UiUpdate::Loading).await;
    info!(generation, "starting board load");

    let api = state.api.clone();
    let load_tx = state.load_tx.clone();
    let columns = state.config.board.categories;
    let clues_per_category = state.config.board.clues_per_category;

    tokio::spawn(async move {
        let result = api.load_board(columns, clues_per_category).await;
        let _ = load_tx
            .send(LoadEvent::Finished { generation, result })
            .await;
    });
}

/// Handle a user command. Returns `true` when the session should shut down.
pub async fn handle_command(
    state: &mut SessionState,
    cmd: UserCommand,
    ui_tx: &mpsc::Sender<UiUpdate>,
) -> bool {
    match cmd {
        UserCommand::Activate { col, row } => {
            if let Some(board) = &mut state.board {
                if let Some(cell) = board.activate(col, row) {
                    debug!(col, row, reveal = ?cell.reveal, "cell revealed");
                    let _ = ui_tx.send(UiUpdate::CellRevealed { col, row, cell }).await;
                }
            }
            false
        }
        UserCommand::Restart => {
            info!("restart requested");
            start_load(state, ui_tx).await;
            false
        }
        UserCommand::Quit => {
            info!("quit requested");
            true
        }
    }
}

/// Handle a load completion. Stale generations (superseded by a restart) are
/// discarded; current ones replace the board or surface the failure.
pub async fn handle_load_event(
    state: &mut SessionState,
    event: LoadEvent,
    ui_tx: &mpsc::Sender<UiUpdate>,
) {
    let LoadEvent::Finished { generation, result } = event;

    if generation != state.load_generation {
        debug!(
            generation,
            current = state.load_generation,
            "discarding result from superseded load"
        );
        return;
    }

    match result {
        Ok(categories) => {
            info!(categories = categories.len(), "board loaded");
            let board = Board::new(categories, state.config.board.clues_per_category);
            let snapshot = board.snapshot();
            state.board = Some(board);
            let _ = ui_tx.send(UiUpdate::BoardReady(Box::new(snapshot))).await;
        }
        Err(e) => {
            warn!(error = %e, "board load failed");
            state.board = None;
            let _ = ui_tx.send(UiUpdate::LoadFailed(e.to_string())).await;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
