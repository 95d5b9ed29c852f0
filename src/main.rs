// folio - a personal portfolio as a terminal app
//
// A data scientist's single-page portfolio, rebuilt for the terminal:
// animated section transitions, a hero visualization with count-up
// statistics, staggered skill bars, project demos, and a contact form.
//
// Architecture:
// - Sequencer: timed animation steps, polled by the event loop tick
// - Navigator: section transitions with an exit/enter lock
// - TUI (ratatui): renders sections, overlays, and effects
// - Content: the static catalog (profile, skills, projects, demos)
// - Stats: the statistics the About panel computes live

mod cli;
mod config;
mod content;
mod form;
mod logging;
mod navigation;
mod sequencer;
mod stats;
mod tui;
mod util;

use anyhow::Result;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --update)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Create log buffer for the in-TUI log viewer
    let log_buffer = LogBuffer::new();

    // Initialize tracing/logging
    // Logs go to the TUI buffer (writing to stdout would garble the display)
    // File logging: optionally write to rotating log files as well
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("folio={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // Set up file logging if enabled (non-blocking writer with rotation)
    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            // Create log directory if it doesn't exist
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to buffer-only logging
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
                None
            } else {
                // Create rolling file appender based on configured rotation
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                // Wrap in non-blocking writer (writes happen in background thread)
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                // File layer uses JSON format for structured log parsing
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();

                Some(guard)
            }
        } else {
            // No file logging - buffer layer only
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::info!(
        "folio {} starting ({} theme, intro {})",
        config::VERSION,
        config.theme.name(),
        if config.intro { "on" } else { "off" }
    );

    tui::run_tui(config, log_buffer).await
}
