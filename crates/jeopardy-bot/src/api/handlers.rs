//! HTTP request handlers.

use super::AppState;
use crate::commands::CommandContext;
use crate::error::BotError;
use crate::router;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use telegram_client::{InboundMessage, Update};
use tracing::{debug, error, info, instrument, warn};

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub active_chats: usize,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        active_chats: state.games.session_count().await,
    })
}

/// Webhook endpoint receiving one update per inbound chat message.
///
/// Always answers 200 for a processed update, whatever the outcome; the
/// platform re-delivers on anything else, which would double-apply
/// commands. The only non-200 is a wrong path token.
#[instrument(skip_all)]
pub async fn webhook(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(payload): Json<serde_json::Value>,
) -> StatusCode {
    if token != state.webhook_token {
        warn!("Webhook call with wrong token");
        return StatusCode::NOT_FOUND;
    }

    // Anything that does not look like a text message from a user is
    // dropped without a reply: unsupported payloads are not errors.
    let Ok(update) = serde_json::from_value::<Update>(payload) else {
        debug!("Ignoring malformed update payload");
        return StatusCode::OK;
    };
    let Some(inbound) = InboundMessage::from_update(&update) else {
        debug!("Ignoring non-text update");
        return StatusCode::OK;
    };

    let Some(parsed) = router::parse(&inbound.text, &state.bot_name) else {
        return StatusCode::OK;
    };
    let Some(command) = state.commands.get(&parsed.keyword) else {
        debug!("Unknown command /{}", parsed.keyword);
        return StatusCode::OK;
    };

    let ctx = CommandContext {
        chat_id: inbound.chat_id,
        message_id: inbound.message_id,
        sender: inbound.sender,
        args: parsed.args,
    };

    info!(chat_id = ctx.chat_id, command = %parsed.keyword, "Dispatching command");

    match command.execute(&ctx).await {
        Ok(Some(reply)) => {
            if let Err(e) = state
                .telegram
                .send_message(ctx.chat_id, &reply.text, reply.reply_to)
                .await
            {
                error!("Failed to send reply: {}", e);
            }
        }
        Ok(None) => {}
        Err(e) => report_crash(&state, &ctx, e).await,
    }

    StatusCode::OK
}

/// Last-resort failure path: file an automatic crash report and apologize.
async fn report_crash(state: &AppState, ctx: &CommandContext, error: BotError) {
    error!("Handler error: {}", error);

    let body = format!("```\n{}\n```", error);
    let text = match state.issues.create_issue("Crash Report", &body).await {
        Ok(issue) => format!(
            "Sorry, an unexpected error occurred. An error report has been \
             automatically generated and is available here: {}",
            issue.html_url
        ),
        Err(report_error) => {
            error!("Failed to file crash report: {}", report_error);
            "Sorry, an unexpected error occurred. Generation of an error report \
             failed, but the error has been logged"
                .to_string()
        }
    };

    if let Err(e) = state.telegram.send_message(ctx.chat_id, &text, None).await {
        error!("Failed to send apology: {}", e);
    }
}
