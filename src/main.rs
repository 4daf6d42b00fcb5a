//! portico - a start-screen dashboard for the terminal.
//!
//! This is the main binary that launches the TUI application.

use std::path::PathBuf;

use portico_config::Config;
use portico_tui::{App, terminal};
use tracing::debug;

/// Installs the env-gated file logger.
///
/// A TUI cannot log to the terminal it draws on, so logging goes to
/// `portico.log` in the data directory, and only when `PORTICO_LOG` is set
/// (its value feeds the env filter, e.g. `PORTICO_LOG=debug`).
fn init_logging(data_dir: &std::path::Path) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = std::env::var("PORTICO_LOG").ok()?;

    let appender = tracing_appender::rolling::never(data_dir, "portico.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

/// Resolves the directory holding provider list files.
fn resolve_data_dir(config: &Config) -> anyhow::Result<PathBuf> {
    match &config.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => Ok(portico_data::store::default_data_dir()?),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load and validate configuration before touching the terminal
    let config = Config::load()?;
    let data_dir = resolve_data_dir(&config)?;
    std::fs::create_dir_all(&data_dir)?;

    let _log_guard = init_logging(&data_dir);
    debug!(data_dir = %data_dir.display(), theme = %config.theme, "starting");

    // Install panic hook to restore the terminal on panic
    terminal::install_panic_hook();

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;

    // Create the app and run the main loop
    let mut app = App::new(config, &data_dir);
    let result = app.run(&mut terminal).await;

    // Always restore the terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
