//! Whatis/whois command - grades a free-text answer.

use crate::commands::{Command, CommandContext, Reply};
use crate::error::BotResult;
use crate::matcher;
use async_trait::async_trait;
use game_store::GameStore;
use score_store::ScoreStore;
use std::sync::Arc;
use tracing::{info, instrument};

pub struct AnswerCommand {
    games: GameStore,
    scores: Arc<ScoreStore>,
}

impl AnswerCommand {
    pub fn new(games: GameStore, scores: Arc<ScoreStore>) -> Self {
        Self { games, scores }
    }
}

#[async_trait]
impl Command for AnswerCommand {
    fn keywords(&self) -> &'static [&'static str] {
        &["whatis", "whois"]
    }

    #[instrument(skip(self, ctx), fields(chat_id = ctx.chat_id, sender = %ctx.sender))]
    async fn execute(&self, ctx: &CommandContext) -> BotResult<Option<Reply>> {
        // Late or stray answers are dropped silently; a reply here would be
        // noise every time someone answers after the round resolved.
        let Some(response) = ctx.args.as_deref() else {
            return Ok(None);
        };

        let session = self.games.session(ctx.chat_id).await;
        let mut session = session.lock().await;

        let Some(round) = session.active() else {
            return Ok(None);
        };
        let answer = round.question.answer.clone();
        let value = round.question.value;

        if matcher::is_correct(response, &answer) {
            self.scores.incr(ctx.chat_id, &ctx.sender, value).await?;
            session.end_round();
            info!("{} answered correctly for {}", ctx.sender, value);
            Ok(Some(Reply::threaded("Correct", ctx.message_id)))
        } else {
            self.scores.decr(ctx.chat_id, &ctx.sender, value).await?;
            info!("{} answered incorrectly for {}", ctx.sender, value);
            Ok(Some(Reply::threaded("Incorrect", ctx.message_id)))
        }
    }
}
