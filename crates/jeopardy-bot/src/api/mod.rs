//! HTTP API: the webhook endpoint the messaging platform delivers to.

mod handlers;
mod middleware;

pub use handlers::*;
pub use middleware::logging_middleware;

use crate::router::CommandTable;
use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use game_store::GameStore;
use issue_client::IssueClient;
use std::sync::Arc;
use telegram_client::TelegramClient;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Static keyword -> handler table
    pub commands: Arc<CommandTable>,
    /// Outbound message sender
    pub telegram: Arc<TelegramClient>,
    /// Crash report filer
    pub issues: Arc<IssueClient>,
    /// Per-chat game state (for the health endpoint)
    pub games: GameStore,
    /// This bot's addressable name for `/cmd@botname` targeting
    pub bot_name: String,
    /// Secret path segment the webhook was registered under
    pub webhook_token: String,
}

/// Create the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/:token", post(handlers::webhook))
        .layer(axum_middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
