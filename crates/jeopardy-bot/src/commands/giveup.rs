//! Giveup command - ends the round and reveals the answer.

use crate::commands::{Command, CommandContext, Reply};
use crate::error::BotResult;
use async_trait::async_trait;
use game_store::GameStore;
use tracing::info;

pub struct GiveUpCommand {
    games: GameStore,
}

impl GiveUpCommand {
    pub fn new(games: GameStore) -> Self {
        Self { games }
    }
}

#[async_trait]
impl Command for GiveUpCommand {
    fn keywords(&self) -> &'static [&'static str] {
        &["giveup"]
    }

    async fn execute(&self, ctx: &CommandContext) -> BotResult<Option<Reply>> {
        let session = self.games.session(ctx.chat_id).await;
        let mut session = session.lock().await;

        let Some(round) = session.end_round() else {
            return Ok(None);
        };

        let held_for = chrono::Utc::now() - round.started_at;
        info!(
            "Chat {} gave up after {}s",
            ctx.chat_id,
            held_for.num_seconds()
        );
        Ok(Some(Reply::text(format!(
            "Correct response was: {}",
            round.question.answer
        ))))
    }
}
