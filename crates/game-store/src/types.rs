//! Game state types.

use chrono::{DateTime, Utc};
use trivia_client::Question;

/// An unanswered question in a chat room.
#[derive(Debug, Clone)]
pub struct ActiveRound {
    pub question: Question,
    /// When the round was served.
    pub started_at: DateTime<Utc>,
}

impl ActiveRound {
    pub fn new(question: Question) -> Self {
        Self {
            question,
            started_at: Utc::now(),
        }
    }
}

/// Per-chat-room game state.
///
/// `last_served` outlives the round it belongs to: it is the raw payload of
/// the most recently served question, kept so a bad question can still be
/// reported after the round ended.
#[derive(Debug, Default)]
pub struct ChatSession {
    active: Option<ActiveRound>,
    last_served: Option<String>,
}

impl ChatSession {
    /// Start a new round, replacing any unanswered one without penalty.
    ///
    /// Returns the canonical answer of the round being replaced, if any.
    pub fn begin_round(&mut self, question: Question, raw: String) -> Option<String> {
        let previous_answer = self
            .active
            .replace(ActiveRound::new(question))
            .map(|round| round.question.answer);
        self.last_served = Some(raw);
        previous_answer
    }

    /// End the current round, if one is active.
    ///
    /// `last_served` is intentionally left in place.
    pub fn end_round(&mut self) -> Option<ActiveRound> {
        self.active.take()
    }

    /// The unanswered round, if any.
    pub fn active(&self) -> Option<&ActiveRound> {
        self.active.as_ref()
    }

    /// Raw payload of the most recently served question.
    pub fn last_served(&self) -> Option<&str> {
        self.last_served.as_deref()
    }
}
