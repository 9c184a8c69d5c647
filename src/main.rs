use std::path::PathBuf;

use quizfx::{app::App, config::QuizConfig, error, logging, models::QuestionStore, Result};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}", error::user_friendly_message(&e));
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let mut config = QuizConfig::load()?;
    if let Some(path) = std::env::args_os().nth(1) {
        config = config.with_questions_path(PathBuf::from(path));
    }
    config.validate()?;
    let log_path = logging::init(&config)?;
    match QuizConfig::config_file_path() {
        Ok(path) if path.exists() => tracing::info!(config = %path.display(), "loaded configuration"),
        _ => tracing::info!("using default configuration"),
    }
    tracing::debug!(log = %log_path.display(), questions = %config.questions_path.display());

    let store = QuestionStore::load(&config.questions_path)?;

    let mut app = App::new(&config, store)?;
    app.init()?;
    app.run().await
}
