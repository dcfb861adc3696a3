//! Per-player score keeping in an external key-value store.
//!
//! The Redis backend is the production one; the memory backend mirrors its
//! semantics for tests and for running without a Redis instance.

mod error;
mod key;
mod memory;
mod redis_store;

pub use error::ScoreError;
pub use key::score_key;
pub use memory::MemoryScores;
pub use redis_store::RedisScores;

use tracing::info;

/// Score storage backend.
pub enum ScoreStore {
    /// External Redis instance
    Redis(RedisScores),
    /// In-memory only (no persistence)
    Memory(MemoryScores),
}

impl ScoreStore {
    /// Connect to Redis.
    pub async fn connect(
        url: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Self, ScoreError> {
        let store = RedisScores::connect(url, namespace).await?;
        info!("Connected to Redis score store");
        Ok(ScoreStore::Redis(store))
    }

    /// Force memory store.
    pub fn memory(namespace: impl Into<String>) -> Self {
        ScoreStore::Memory(MemoryScores::new(namespace))
    }

    /// Atomically add `delta` to a player's score; returns the new total.
    pub async fn incr(&self, chat_id: i64, player: &str, delta: i64) -> Result<i64, ScoreError> {
        match self {
            ScoreStore::Redis(s) => s.incr(chat_id, player, delta).await,
            ScoreStore::Memory(s) => s.incr(chat_id, player, delta).await,
        }
    }

    /// Atomically subtract `delta` from a player's score; returns the new total.
    pub async fn decr(&self, chat_id: i64, player: &str, delta: i64) -> Result<i64, ScoreError> {
        match self {
            ScoreStore::Redis(s) => s.decr(chat_id, player, delta).await,
            ScoreStore::Memory(s) => s.decr(chat_id, player, delta).await,
        }
    }

    /// A player's current score (0 if never recorded).
    pub async fn get(&self, chat_id: i64, player: &str) -> Result<i64, ScoreError> {
        match self {
            ScoreStore::Redis(s) => s.get(chat_id, player).await,
            ScoreStore::Memory(s) => s.get(chat_id, player).await,
        }
    }

    /// All `(player, score)` pairs recorded for a chat room, name-sorted.
    pub async fn chat_scores(&self, chat_id: i64) -> Result<Vec<(String, i64)>, ScoreError> {
        match self {
            ScoreStore::Redis(s) => s.chat_scores(chat_id).await,
            ScoreStore::Memory(s) => s.chat_scores(chat_id).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_incr_decr_get() {
        let store = ScoreStore::memory("trivia");

        assert_eq!(store.get(1001, "Alex").await.unwrap(), 0);

        assert_eq!(store.incr(1001, "Alex", 200).await.unwrap(), 200);
        assert_eq!(store.incr(1001, "Alex", 100).await.unwrap(), 300);
        assert_eq!(store.decr(1001, "Alex", 400).await.unwrap(), -100);

        assert_eq!(store.get(1001, "Alex").await.unwrap(), -100);
    }

    #[tokio::test]
    async fn test_memory_scores_scoped_per_chat() {
        let store = ScoreStore::memory("trivia");

        store.incr(1001, "Alex", 200).await.unwrap();
        store.incr(2002, "Alex", 500).await.unwrap();

        assert_eq!(store.get(1001, "Alex").await.unwrap(), 200);
        assert_eq!(store.get(2002, "Alex").await.unwrap(), 500);
    }

    #[tokio::test]
    async fn test_memory_chat_scores_listing() {
        let store = ScoreStore::memory("trivia");

        store.incr(1001, "Ken", 400).await.unwrap();
        store.incr(1001, "Alex", 200).await.unwrap();
        store.incr(2002, "Brad", 100).await.unwrap();

        let scores = store.chat_scores(1001).await.unwrap();
        assert_eq!(
            scores,
            vec![("Alex".to_string(), 200), ("Ken".to_string(), 400)]
        );
    }

    #[tokio::test]
    async fn test_memory_chat_scores_empty() {
        let store = ScoreStore::memory("trivia");
        assert!(store.chat_scores(1001).await.unwrap().is_empty());
    }
}
