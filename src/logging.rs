//! Diagnostic logging to disk.
//!
//! The terminal belongs to the quiz, so `tracing` output goes to a log file
//! (default: `~/.local/share/quizfx/quizfx.log`) appended across runs.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::config::QuizConfig;
use crate::{QuizError, Result};

/// Install the global `tracing` subscriber writing to the configured file.
///
/// Returns the path being written to.
pub fn init(config: &QuizConfig) -> Result<PathBuf> {
    let level = config.log_level()?;
    let path = config.log_file_path()?;
    let file = open_log_file(&path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| QuizError::Config(format!("Failed to install logger: {}", e)))?;

    tracing::info!(path = %path.display(), %level, "logging started");
    Ok(path)
}

fn open_log_file(path: &Path) -> Result<fs::File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}
