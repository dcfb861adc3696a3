//! In-memory per-chat game state.

use crate::types::ChatSession;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

/// In-memory map from chat room to its game session.
///
/// Sessions are created lazily on first access and live for the process
/// lifetime; only scores survive a restart, in the external store.
///
/// Each session is handed out behind its own `Mutex`. A command handler
/// holds that lock for its whole read-decide-mutate sequence, so two
/// updates racing into the same chat room cannot interleave and corrupt the
/// active round. Different rooms proceed in parallel.
#[derive(Clone, Default)]
pub struct GameStore {
    sessions: Arc<RwLock<HashMap<i64, Arc<Mutex<ChatSession>>>>>,
}

impl GameStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the session for a chat room, creating it on first access.
    pub async fn session(&self, chat_id: i64) -> Arc<Mutex<ChatSession>> {
        {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(&chat_id) {
                return session.clone();
            }
        }

        let mut sessions = self.sessions.write().await;
        sessions
            .entry(chat_id)
            .or_insert_with(|| {
                debug!("Created session for chat {}", chat_id);
                Arc::new(Mutex::new(ChatSession::default()))
            })
            .clone()
    }

    /// Number of chat rooms seen so far.
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
