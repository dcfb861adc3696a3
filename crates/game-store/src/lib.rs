//! In-memory game state for the trivia bot.
//!
//! Tracks, per chat room, the unanswered question and the raw payload of
//! the most recently served one. Nothing here is persisted.

mod store;
mod types;

pub use store::GameStore;
pub use types::{ActiveRound, ChatSession};

#[cfg(test)]
mod tests {
    use super::*;
    use trivia_client::Question;

    fn question(answer: &str, value: i64) -> Question {
        Question {
            round: "Jeopardy!".into(),
            value,
            category: "TEST".into(),
            date: "2000-01-01".into(),
            question: "clue".into(),
            answer: answer.into(),
        }
    }

    #[test]
    fn test_begin_round_fresh_session() {
        let mut session = ChatSession::default();
        assert!(session.active().is_none());
        assert!(session.last_served().is_none());

        let previous = session.begin_round(question("Mount Everest", 200), "{raw}".into());

        assert!(previous.is_none());
        assert_eq!(session.active().unwrap().question.answer, "Mount Everest");
        assert_eq!(session.last_served(), Some("{raw}"));
    }

    #[test]
    fn test_begin_round_replaces_active_and_returns_answer() {
        let mut session = ChatSession::default();
        session.begin_round(question("Paris", 100), "{one}".into());

        let previous = session.begin_round(question("Mount Everest", 200), "{two}".into());

        assert_eq!(previous.as_deref(), Some("Paris"));
        assert_eq!(session.active().unwrap().question.value, 200);
        assert_eq!(session.last_served(), Some("{two}"));
    }

    #[test]
    fn test_end_round_keeps_last_served() {
        let mut session = ChatSession::default();
        session.begin_round(question("Paris", 100), "{raw}".into());

        let ended = session.end_round();

        assert_eq!(ended.unwrap().question.answer, "Paris");
        assert!(session.active().is_none());
        // Still reportable after the round resolved.
        assert_eq!(session.last_served(), Some("{raw}"));
    }

    #[test]
    fn test_end_round_idle() {
        let mut session = ChatSession::default();
        assert!(session.end_round().is_none());
    }

    #[tokio::test]
    async fn test_store_creates_sessions_lazily() {
        let store = GameStore::new();
        assert_eq!(store.session_count().await, 0);

        let session = store.session(1001).await;
        assert!(session.lock().await.active().is_none());
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_store_returns_same_session() {
        let store = GameStore::new();

        {
            let session = store.session(1001).await;
            let mut session = session.lock().await;
            session.begin_round(question("Paris", 100), "{raw}".into());
        }

        let session = store.session(1001).await;
        assert_eq!(
            session.lock().await.active().unwrap().question.answer,
            "Paris"
        );
        assert_eq!(store.session_count().await, 1);
    }

    #[tokio::test]
    async fn test_store_isolates_chats() {
        let store = GameStore::new();

        {
            let session = store.session(1001).await;
            session
                .lock()
                .await
                .begin_round(question("Paris", 100), "{raw}".into());
        }

        let other = store.session(2002).await;
        assert!(other.lock().await.active().is_none());
        assert_eq!(store.session_count().await, 2);
    }

    #[tokio::test]
    async fn test_session_lock_serializes_mutation() {
        let store = GameStore::new();
        let session = store.session(1001).await;

        // Hold the session across an await point the way a handler does.
        let guard = session.lock().await;
        assert!(session.try_lock().is_err());
        drop(guard);
        assert!(session.try_lock().is_ok());
    }
}
