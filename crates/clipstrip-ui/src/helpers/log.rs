// crates/clipstrip-ui/src/helpers/log.rs
//
// Logging for the desktop shell.
//
// In release builds with `windows_subsystem = "windows"` (double-click launch)
// there is no console, so every event also goes to an append-only file in the
// OS temp directory:
//
//   <temp>/clipstrip.log
//
// Filtering follows RUST_LOG (e.g. `RUST_LOG=clipstrip_core=debug`), default
// `info`. The file layer is skipped when the file cannot be opened; stderr
// still works.

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

pub const LOG_FILE: &str = "clipstrip.log";

pub fn log_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE)
}

fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

/// Install the global subscriber. Call once, before the event loop starts.
pub fn init() -> Result<()> {
    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter());

    let path = log_path();
    let file_layer = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => Some(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_filter(env_filter()),
        ),
        Err(e) => {
            eprintln!("clipstrip: cannot open {}: {e}", path.display());
            None
        }
    };

    tracing_subscriber::registry()
        .with(console)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!(path = %path.display(), "logging initialised");
    Ok(())
}
