//! Score command - lists the chat room's scoreboard.

use crate::commands::{Command, CommandContext, Reply};
use crate::error::BotResult;
use async_trait::async_trait;
use score_store::ScoreStore;
use std::sync::Arc;

pub struct ScoreCommand {
    scores: Arc<ScoreStore>,
}

impl ScoreCommand {
    pub fn new(scores: Arc<ScoreStore>) -> Self {
        Self { scores }
    }
}

#[async_trait]
impl Command for ScoreCommand {
    fn keywords(&self) -> &'static [&'static str] {
        &["score"]
    }

    async fn execute(&self, ctx: &CommandContext) -> BotResult<Option<Reply>> {
        let scores = self.scores.chat_scores(ctx.chat_id).await?;

        let mut text = String::from("Scores:");
        for (player, score) in scores {
            text.push_str(&format!("\n{}: {}", player, score));
        }

        Ok(Some(Reply::text(text)))
    }
}
