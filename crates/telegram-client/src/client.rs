//! Telegram Bot API HTTP client.

use crate::error::TelegramError;
use crate::types::*;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Telegram Bot API client.
///
/// The bot token is stored using `SecretString` to prevent accidental
/// exposure in logs or debug output.
#[derive(Clone)]
pub struct TelegramClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl TelegramClient {
    /// Create a new Telegram client.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, TelegramError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key: SecretString::new(api_key.into()),
        })
    }

    fn endpoint(&self, method: &str) -> String {
        format!(
            "{}/bot{}/{}",
            self.base_url,
            self.api_key.expose_secret(),
            method
        )
    }

    /// Check if the Bot API is reachable and the token is valid.
    pub async fn health_check(&self) -> bool {
        self.get_me().await.is_ok()
    }

    /// Get the bot's own identity.
    #[instrument(skip(self))]
    pub async fn get_me(&self) -> Result<BotIdentity, TelegramError> {
        let response = self.client.get(self.endpoint("getMe")).send().await?;
        self.handle_response(response).await
    }

    /// Register the webhook URL the platform should deliver updates to.
    #[instrument(skip(self))]
    pub async fn set_webhook(&self, url: &str) -> Result<(), TelegramError> {
        let request = SetWebhookRequest { url: url.into() };
        let response = self
            .client
            .post(self.endpoint("setWebhook"))
            .json(&request)
            .send()
            .await?;

        self.handle_response::<bool>(response).await?;
        debug!("Webhook registered");
        Ok(())
    }

    /// Send a text message, optionally as a reply to an earlier message.
    #[instrument(skip(self, text))]
    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        reply_to: Option<i64>,
    ) -> Result<(), TelegramError> {
        let request = SendMessageRequest {
            chat_id,
            text: text.to_string(),
            reply_to_message_id: reply_to,
        };

        let response = self
            .client
            .post(self.endpoint("sendMessage"))
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let msg = describe_failure(response).await;
            warn!("Send failed: {}", msg);
            return Err(TelegramError::SendFailed(msg));
        }

        let envelope: ApiResponse<Message> = response.json().await?;
        if !envelope.ok {
            let msg = envelope.description.unwrap_or_else(|| "not ok".into());
            warn!("Send failed: {}", msg);
            return Err(TelegramError::SendFailed(msg));
        }

        debug!("Sent message to {}", chat_id);
        Ok(())
    }

    /// Handle a Bot API response envelope, converting errors appropriately.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, TelegramError> {
        if !response.status().is_success() {
            return Err(TelegramError::Api(describe_failure(response).await));
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.ok {
            return Err(TelegramError::Api(
                envelope.description.unwrap_or_else(|| "not ok".into()),
            ));
        }

        envelope
            .result
            .ok_or_else(|| TelegramError::Api("missing result".into()))
    }
}

/// Extract the API `description` from a failed response, falling back to the
/// HTTP status when the body is not the usual envelope.
async fn describe_failure(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    serde_json::from_str::<ApiResponse<serde_json::Value>>(&body)
        .ok()
        .and_then(|envelope| envelope.description)
        .unwrap_or_else(|| status.to_string())
}
