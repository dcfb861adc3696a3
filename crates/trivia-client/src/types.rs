//! Trivia source types.

use serde::{Deserialize, Serialize};

/// A trivia question as served by the upstream source.
///
/// Immutable once fetched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    /// Round label, e.g. "Double Jeopardy!".
    pub round: String,
    /// Point value; added on a correct answer, subtracted on a miss.
    pub value: i64,
    pub category: String,
    /// Original air date of the question.
    pub date: String,
    /// The clue text shown to players.
    pub question: String,
    /// Canonical correct response.
    pub answer: String,
}

/// A fetched question together with the raw upstream payload.
///
/// The raw payload is retained verbatim (pretty-printed) so error reports
/// can include fields this crate does not model.
#[derive(Debug, Clone)]
pub struct FetchedQuestion {
    pub question: Question,
    pub raw: String,
}
