//! In-memory score keeping for tests and local runs without Redis.

use crate::error::ScoreError;
use crate::key::{player_from_key, score_key};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Scores held in process memory. Same key scheme and semantics as the
/// Redis backend, without persistence.
#[derive(Clone, Default)]
pub struct MemoryScores {
    namespace: String,
    entries: Arc<RwLock<HashMap<String, i64>>>,
}

impl MemoryScores {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn incr(&self, chat_id: i64, player: &str, delta: i64) -> Result<i64, ScoreError> {
        let key = score_key(&self.namespace, chat_id, player);
        let mut entries = self.entries.write().await;
        let total = entries.entry(key).or_insert(0);
        *total += delta;
        Ok(*total)
    }

    pub async fn decr(&self, chat_id: i64, player: &str, delta: i64) -> Result<i64, ScoreError> {
        self.incr(chat_id, player, -delta).await
    }

    pub async fn get(&self, chat_id: i64, player: &str) -> Result<i64, ScoreError> {
        let key = score_key(&self.namespace, chat_id, player);
        Ok(self.entries.read().await.get(&key).copied().unwrap_or(0))
    }

    pub async fn chat_scores(&self, chat_id: i64) -> Result<Vec<(String, i64)>, ScoreError> {
        let entries = self.entries.read().await;
        let mut scores: Vec<(String, i64)> = entries
            .iter()
            .filter_map(|(key, value)| {
                player_from_key(&self.namespace, chat_id, key).map(|player| (player, *value))
            })
            .collect();

        scores.sort();
        Ok(scores)
    }
}
