//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum BotError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Telegram error: {0}")]
    Telegram(#[from] telegram_client::TelegramError),

    #[error("Trivia source error: {0}")]
    Trivia(#[from] trivia_client::TriviaError),

    #[error("Score store error: {0}")]
    Scores(#[from] score_store::ScoreError),

    #[error("Issue tracker error: {0}")]
    Issues(#[from] issue_client::IssueError),

    #[error("Changelog error: {0}")]
    Changelog(#[from] std::io::Error),
}

/// Result type alias for application errors.
pub type BotResult<T> = Result<T, BotError>;
