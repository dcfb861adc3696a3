//! Redis-backed score keeping.

use crate::error::ScoreError;
use crate::key::{chat_pattern, player_from_key, score_key};
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use tracing::{debug, instrument};

/// Scores held in an external Redis instance.
///
/// Every adjustment is a single INCRBY/DECRBY round trip, so concurrent
/// answers from different players never lose updates.
#[derive(Clone)]
pub struct RedisScores {
    manager: ConnectionManager,
    namespace: String,
}

impl RedisScores {
    /// Connect to Redis.
    pub async fn connect(
        url: impl Into<String>,
        namespace: impl Into<String>,
    ) -> Result<Self, ScoreError> {
        let url: String = url.into();
        let client = redis::Client::open(url)?;
        let manager = ConnectionManager::new(client).await?;

        Ok(Self {
            manager,
            namespace: namespace.into(),
        })
    }

    #[instrument(skip(self))]
    pub async fn incr(&self, chat_id: i64, player: &str, delta: i64) -> Result<i64, ScoreError> {
        let key = score_key(&self.namespace, chat_id, player);
        let mut conn = self.manager.clone();
        let total: i64 = conn.incr(&key, delta).await?;
        debug!("Incremented {} by {} -> {}", key, delta, total);
        Ok(total)
    }

    #[instrument(skip(self))]
    pub async fn decr(&self, chat_id: i64, player: &str, delta: i64) -> Result<i64, ScoreError> {
        let key = score_key(&self.namespace, chat_id, player);
        let mut conn = self.manager.clone();
        let total: i64 = conn.decr(&key, delta).await?;
        debug!("Decremented {} by {} -> {}", key, delta, total);
        Ok(total)
    }

    pub async fn get(&self, chat_id: i64, player: &str) -> Result<i64, ScoreError> {
        let key = score_key(&self.namespace, chat_id, player);
        let mut conn = self.manager.clone();
        let value: Option<i64> = conn.get(&key).await?;
        Ok(value.unwrap_or(0))
    }

    /// All players with a recorded score in a chat room.
    #[instrument(skip(self))]
    pub async fn chat_scores(&self, chat_id: i64) -> Result<Vec<(String, i64)>, ScoreError> {
        let pattern = chat_pattern(&self.namespace, chat_id);
        let mut conn = self.manager.clone();
        let keys: Vec<String> = conn.keys(&pattern).await?;

        let mut scores = Vec::with_capacity(keys.len());
        for key in keys {
            let Some(player) = player_from_key(&self.namespace, chat_id, &key) else {
                continue;
            };
            let value: Option<i64> = conn.get(&key).await?;
            scores.push((player, value.unwrap_or(0)));
        }

        scores.sort();
        Ok(scores)
    }

    /// Check if Redis answers a PING.
    pub async fn health_check(&self) -> bool {
        let mut conn = self.manager.clone();
        redis::cmd("PING")
            .query_async::<_, String>(&mut conn)
            .await
            .is_ok()
    }
}
