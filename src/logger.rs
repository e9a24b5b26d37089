use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGER_INIT: OnceCell<()> = OnceCell::new();

/// Install the process-wide subscriber. Only the first call does anything.
///
/// Lines are appended to `log_path`; if it cannot be opened, logging goes to
/// stderr instead.
pub fn init_logger(log_path: &Path) {
    LOGGER_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let builder = fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_line_number(true);

        match open_log_file(log_path) {
            Ok(file) => {
                let _ = builder.with_ansi(false).with_writer(Mutex::new(file)).try_init();
                tracing::info!(path = %log_path.display(), "logger initialized");
            }
            Err(err) => {
                let _ = builder.with_writer(std::io::stderr).try_init();
                tracing::error!("log file unavailable, logging to stderr: {err:#}");
            }
        }
    });
}

fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
