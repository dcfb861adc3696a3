//! Trivia source HTTP client.

use crate::error::TriviaError;
use crate::types::*;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, instrument};

/// Client for the trivia question source.
#[derive(Clone)]
pub struct TriviaClient {
    client: Client,
    source_url: String,
}

impl TriviaClient {
    /// Create a new trivia client.
    pub fn new(source_url: impl Into<String>, timeout: Duration) -> Result<Self, TriviaError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            source_url: source_url.into(),
        })
    }

    /// Check if the trivia source is reachable.
    pub async fn health_check(&self) -> bool {
        self.fetch_question().await.is_ok()
    }

    /// Fetch a fresh question.
    #[instrument(skip(self))]
    pub async fn fetch_question(&self) -> Result<FetchedQuestion, TriviaError> {
        let response = self.client.get(&self.source_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TriviaError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // Keep the full payload around for error reports; the typed view
        // only covers the fields the game uses.
        let payload: serde_json::Value = response.json().await?;
        let raw = serde_json::to_string_pretty(&payload)?;
        let question: Question = serde_json::from_value(payload)?;

        debug!(category = %question.category, value = question.value, "Fetched question");

        Ok(FetchedQuestion { question, raw })
    }
}
