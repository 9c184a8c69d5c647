//! Configuration management module
//! 
//! Handles loading and validation of the quiz configuration: where the
//! questions live, how fast frames run, and where logs go.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{QuizError, Result, APP_NAME, CONFIG_FILE, DEFAULT_QUESTIONS_FILE, LOG_FILE};

const MIN_FRAME_INTERVAL: Duration = Duration::from_millis(5);
const MAX_FRAME_INTERVAL: Duration = Duration::from_secs(1);

/// Quiz configuration, read from `quizfx.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// CSV file with the questions
    pub questions_path: PathBuf,
    /// Time between frames, e.g. "33ms"
    pub frame_interval: String,
    /// Log destination; defaults to the data directory
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// One of error, warn, info, debug, trace
    pub log_level: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_path: PathBuf::from(DEFAULT_QUESTIONS_FILE),
            frame_interval: "33ms".to_string(),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl QuizConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the question file
    pub fn with_questions_path(mut self, path: PathBuf) -> Self {
        self.questions_path = path;
        self
    }

    /// Set the frame interval
    pub fn with_frame_interval(mut self, interval: impl Into<String>) -> Self {
        self.frame_interval = interval.into();
        self
    }

    /// Parsed frame interval
    pub fn frame_interval(&self) -> Result<Duration> {
        let interval = humantime::parse_duration(self.frame_interval.trim()).map_err(|e| {
            QuizError::Config(format!(
                "Invalid frame_interval '{}': {}",
                self.frame_interval, e
            ))
        })?;

        if interval < MIN_FRAME_INTERVAL || interval > MAX_FRAME_INTERVAL {
            return Err(QuizError::Config(format!(
                "frame_interval must be between {} and {}",
                humantime::format_duration(MIN_FRAME_INTERVAL),
                humantime::format_duration(MAX_FRAME_INTERVAL)
            )));
        }
        Ok(interval)
    }

    /// Parsed log level
    pub fn log_level(&self) -> Result<tracing::Level> {
        self.log_level.trim().parse::<tracing::Level>().map_err(|_| {
            QuizError::Config(format!(
                "Invalid log_level '{}' (expected error, warn, info, debug or trace)",
                self.log_level
            ))
        })
    }

    /// Log file location, falling back to $DATA_HOME/quizfx/quizfx.log
    pub fn log_file_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.log_file {
            return Ok(path.clone());
        }
        let data_dir = dirs::data_dir().ok_or_else(|| {
            QuizError::Config("Unable to determine data directory".to_string())
        })?;
        Ok(data_dir.join(APP_NAME).join(LOG_FILE))
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.questions_path.as_os_str().is_empty() {
            return Err(QuizError::Config(
                "questions_path must not be empty".to_string(),
            ));
        }
        self.frame_interval()?;
        self.log_level()?;
        Ok(())
    }

    /// Load configuration from the standard config file location
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from `path`, or defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            QuizError::Config(format!("Failed to read config file {}: {}", path.display(), e))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            QuizError::Config(format!("Failed to parse config file {}: {}", path.display(), e))
        })?;

        // Validate the loaded configuration
        config.validate()?;

        Ok(config)
    }

    /// Get the standard configuration file path
    /// Uses $CONFIG_HOME/quizfx/quizfx.toml
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            QuizError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = QuizConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.frame_interval().unwrap(), Duration::from_millis(33));
        assert_eq!(config.log_level().unwrap(), tracing::Level::INFO);
        assert_eq!(config.questions_path, PathBuf::from("questions.csv"));
    }

    #[test]
    fn test_toml_serialization() {
        let config = QuizConfig::new()
            .with_questions_path(PathBuf::from("/tmp/q.csv"))
            .with_frame_interval("16ms");
        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let deserialized: QuizConfig =
            toml::from_str(&toml_str).expect("Failed to deserialize from TOML");
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quizfx.toml");
        fs::write(&path, "log_level = \"debug\"\n").unwrap();

        let config = QuizConfig::load_from(&path).unwrap();
        assert_eq!(config.log_level().unwrap(), tracing::Level::DEBUG);
        assert_eq!(config.frame_interval, "33ms");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = QuizConfig::load_from(&temp_dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, QuizConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let bad_interval = QuizConfig::new().with_frame_interval("soon");
        assert!(matches!(bad_interval.validate(), Err(QuizError::Config(_))));

        let too_fast = QuizConfig::new().with_frame_interval("1ms");
        assert!(too_fast.frame_interval().is_err());

        let too_slow = QuizConfig::new().with_frame_interval("2s");
        assert!(too_slow.frame_interval().is_err());

        let bad_level = QuizConfig {
            log_level: "loud".to_string(),
            ..QuizConfig::default()
        };
        assert!(bad_level.validate().is_err());

        let no_questions = QuizConfig::new().with_questions_path(PathBuf::new());
        assert!(no_questions.validate().is_err());
    }

    #[test]
    fn test_unparseable_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("quizfx.toml");
        fs::write(&path, "frame_interval = [").unwrap();
        assert!(matches!(QuizConfig::load_from(&path), Err(QuizError::Config(_))));
    }

    #[test]
    fn test_config_file_path() {
        let path = QuizConfig::config_file_path();
        assert!(path.is_ok());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("quizfx"));
        assert!(path.to_string_lossy().contains("quizfx.toml"));
    }

    #[test]
    fn test_explicit_log_file_wins() {
        let config = QuizConfig {
            log_file: Some(PathBuf::from("/tmp/x.log")),
            ..QuizConfig::default()
        };
        assert_eq!(config.log_file_path().unwrap(), PathBuf::from("/tmp/x.log"));
    }
}
