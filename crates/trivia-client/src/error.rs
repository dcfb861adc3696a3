//! Trivia source client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriviaError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Trivia source error: {status} - {message}")]
    Api { status: u16, message: String },
}
