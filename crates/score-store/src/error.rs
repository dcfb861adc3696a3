//! Score store errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),
}
