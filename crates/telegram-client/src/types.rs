//! Telegram Bot API types.

use serde::{Deserialize, Serialize};

/// Response envelope wrapping every Bot API call.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
}

/// Inbound webhook update.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub from: Option<User>,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
}

/// Outgoing sendMessage request.
#[derive(Debug, Clone, Serialize)]
pub struct SendMessageRequest {
    pub chat_id: i64,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to_message_id: Option<i64>,
}

/// setWebhook request.
#[derive(Debug, Clone, Serialize)]
pub struct SetWebhookRequest {
    pub url: String,
}

/// Bot identity returned by getMe.
#[derive(Debug, Clone, Deserialize)]
pub struct BotIdentity {
    pub id: i64,
    pub first_name: String,
    pub username: Option<String>,
}

/// Parsed inbound message for bot processing.
#[derive(Debug, Clone)]
pub struct InboundMessage {
    /// Chat room the message arrived in.
    pub chat_id: i64,
    /// Message id, used for reply threading.
    pub message_id: i64,
    /// The message text.
    pub text: String,
    /// Sender display name (first name, plus last name if present).
    pub sender: String,
}

impl InboundMessage {
    /// Extract a bot message from a webhook update.
    ///
    /// Returns `None` for anything that is not a text message with a sender
    /// (edited messages, stickers, join notifications and the like).
    pub fn from_update(update: &Update) -> Option<Self> {
        let message = update.message.as_ref()?;
        let text = message.text.clone()?;
        let from = message.from.as_ref()?;

        let mut sender = from.first_name.clone();
        if let Some(last_name) = &from.last_name {
            sender.push(' ');
            sender.push_str(last_name);
        }

        Some(Self {
            chat_id: message.chat.id,
            message_id: message.message_id,
            text,
            sender,
        })
    }
}
