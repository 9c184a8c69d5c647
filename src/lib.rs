//! QuizFX - animated multiple-choice quiz
//!
//! A mouse-driven quiz rendered on a fixed logical canvas, with per-option
//! click feedback, a trailing cursor effect, and a celebration or
//! encouragement finale chosen by score.

use thiserror::Error;

// Public re-exports
pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod quiz;
pub mod render;
pub mod util;

// Common error types
#[derive(Debug, Error)]
pub enum QuizError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Question file could not be read or decoded
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// A question row failed validation
    #[error("Invalid question on row {row}: {reason}")]
    InvalidQuestion { row: usize, reason: String },
    /// The question file contained no questions
    #[error("Question file contains no questions")]
    EmptyQuestionSet,
    /// Configuration validation or parsing error
    #[error("Configuration error: {0}")]
    Config(String),
    /// TUI rendering or interaction error
    #[error("TUI error: {0}")]
    Tui(String),
}

impl From<toml::de::Error> for QuizError {
    fn from(err: toml::de::Error) -> Self {
        QuizError::Config(format!("TOML parsing error: {}", err))
    }
}

/// Result type alias for quiz operations
pub type Result<T> = std::result::Result<T, QuizError>;

/// Error reporting utilities
pub mod error {
    use super::QuizError;

    /// Convert error to user-friendly message with suggestions
    pub fn user_friendly_message(error: &QuizError) -> String {
        match error {
            QuizError::Io(err) if err.kind() == std::io::ErrorKind::NotFound => {
                "Question file not found. Pass the path as the first argument or set questions_path in the config."
                    .to_string()
            }
            QuizError::Csv(err) => {
                format!("Could not read the question file ({}). Expected columns: question, optionA, optionB, optionC, correctOption.", err)
            }
            QuizError::InvalidQuestion { row, reason } => {
                format!("Question {} is invalid: {}. Fix the row and restart.", row, reason)
            }
            QuizError::EmptyQuestionSet => {
                "The question file has a header but no questions. Add at least one row.".to_string()
            }
            QuizError::Config(msg) => {
                format!("Configuration error: {}. Check your settings.", msg)
            }
            QuizError::Tui(_) => {
                "Could not set up the terminal. Run quizfx in an interactive terminal.".to_string()
            }
            _ => error.to_string(),
        }
    }
}

// Common types and constants
pub const APP_NAME: &str = "quizfx";
pub const CONFIG_FILE: &str = "quizfx.toml";
pub const LOG_FILE: &str = "quizfx.log";
pub const DEFAULT_QUESTIONS_FILE: &str = "questions.csv";

/// Logical canvas width all draw commands and hit tests use
pub const CANVAS_WIDTH: f64 = 800.0;
/// Logical canvas height
pub const CANVAS_HEIGHT: f64 = 600.0;
