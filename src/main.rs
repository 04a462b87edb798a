// cluegrid entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Build the trivia API client
// 4. Create mpsc channels
// 5. Spawn the session controller task (starts the first board load)
// 6. Run the TUI event loop (blocking until the user quits)
// 7. Cleanup on exit

use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

use cluegrid::api::ApiClient;
use cluegrid::config;
use cluegrid::session::{self, SessionState};
use cluegrid::tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not the terminal, which the TUI owns)
    init_tracing()?;
    info!("cluegrid starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: {} categories x {} clues from {}",
        config.board.categories, config.board.clues_per_category, config.api.base_url
    );

    // 3. Build the API client
    let api = ApiClient::new(&config.api).context("failed to build API client")?;

    // 4. Create mpsc channels
    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);
    let (load_tx, load_rx) = mpsc::channel(16);

    // 5. Spawn the session controller task
    let state = SessionState::new(config, Arc::new(api), load_tx);
    let session_handle = tokio::spawn(async move {
        if let Err(e) = session::run(state, cmd_rx, load_rx, ui_tx).await {
            error!("session loop error: {e}");
        }
    });

    // 6. Run the TUI event loop (blocking until the user quits)
    if let Err(e) = tui::run(ui_rx, cmd_tx).await {
        error!("TUI error: {e}");
    }

    // 7. Cleanup: wait for the session task to finish (with timeout)
    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = session_handle.await;
    })
    .await;

    info!("cluegrid shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("cluegrid.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cluegrid=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
