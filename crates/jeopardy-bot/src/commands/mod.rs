//! Bot command handlers.

mod answer;
mod changelog;
mod flag;
mod giveup;
mod jeopardy;
mod score;
mod version;

pub use answer::AnswerCommand;
pub use changelog::ChangelogCommand;
pub use flag::FlagCommand;
pub use giveup::GiveUpCommand;
pub use jeopardy::JeopardyCommand;
pub use score::ScoreCommand;
pub use version::VersionCommand;

use crate::error::BotResult;
use async_trait::async_trait;

/// Invocation context handed to every command.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Chat room the command arrived in.
    pub chat_id: i64,
    /// Id of the triggering message, for reply threading.
    pub message_id: i64,
    /// Sender display name; doubles as the score key suffix.
    pub sender: String,
    /// Free-text parameters after the keyword, lower-cased.
    pub args: Option<String>,
}

/// An outbound reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// Message to thread the reply under, if any.
    pub reply_to: Option<i64>,
}

impl Reply {
    /// Plain reply into the chat.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            reply_to: None,
        }
    }

    /// Reply threaded under the triggering message.
    pub fn threaded(text: impl Into<String>, message_id: i64) -> Self {
        Self {
            text: text.into(),
            reply_to: Some(message_id),
        }
    }
}

/// Command handler trait.
///
/// `execute` returning `Ok(None)` means the command was a silent no-op for
/// the current state (no active question, missing parameters); nothing is
/// sent. Errors are caught only by the webhook dispatcher, which files a
/// crash report.
#[async_trait]
pub trait Command: Send + Sync {
    /// Keywords that invoke this command (e.g. `whatis` and `whois`).
    fn keywords(&self) -> &'static [&'static str];

    /// Run the command against the current game state.
    async fn execute(&self, ctx: &CommandContext) -> BotResult<Option<Reply>>;
}
