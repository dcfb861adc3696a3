//! Jeopardy command - serves a fresh question.

use crate::commands::{Command, CommandContext, Reply};
use crate::error::BotResult;
use async_trait::async_trait;
use game_store::GameStore;
use std::sync::Arc;
use tracing::{info, instrument};
use trivia_client::{FetchedQuestion, Question, TriviaClient};

pub struct JeopardyCommand {
    trivia: Arc<TriviaClient>,
    games: GameStore,
}

impl JeopardyCommand {
    pub fn new(trivia: Arc<TriviaClient>, games: GameStore) -> Self {
        Self { trivia, games }
    }
}

#[async_trait]
impl Command for JeopardyCommand {
    fn keywords(&self) -> &'static [&'static str] {
        &["jeopardy"]
    }

    #[instrument(skip(self, ctx), fields(chat_id = ctx.chat_id))]
    async fn execute(&self, ctx: &CommandContext) -> BotResult<Option<Reply>> {
        let session = self.games.session(ctx.chat_id).await;
        let mut session = session.lock().await;

        let FetchedQuestion { question, raw } = self.trivia.fetch_question().await?;
        info!(
            "Serving {} ${} question to chat {}",
            question.category, question.value, ctx.chat_id
        );

        // Starting over mid-round is allowed; the unanswered question is
        // revealed in the reply rather than penalized.
        let previous_answer = session.begin_round(question.clone(), raw);

        Ok(Some(Reply::text(format_question(
            &question,
            previous_answer.as_deref(),
        ))))
    }
}

fn format_question(question: &Question, previous_answer: Option<&str>) -> String {
    let mut text = String::new();
    if let Some(previous) = previous_answer {
        text.push_str(&format!("Last Answer: {}\n", previous));
    }
    text.push_str(&format!(
        "{} ${}:\nCategory: {}\n{}\n{}",
        question.round, question.value, question.category, question.date, question.question
    ));
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            round: "Jeopardy!".into(),
            value: 200,
            category: "WORLD GEOGRAPHY".into(),
            date: "1996-12-06".into(),
            question: "The tallest mountain on Earth".into(),
            answer: "Mount Everest".into(),
        }
    }

    #[test]
    fn test_format_question() {
        assert_eq!(
            format_question(&question(), None),
            "Jeopardy! $200:\nCategory: WORLD GEOGRAPHY\n1996-12-06\nThe tallest mountain on Earth"
        );
    }

    #[test]
    fn test_format_question_with_previous_answer() {
        let text = format_question(&question(), Some("Paris"));
        assert!(text.starts_with("Last Answer: Paris\n"));
        assert!(text.contains("WORLD GEOGRAPHY"));
    }
}
