//! Score key scheme: `<namespace>:<chat_id>:<player_name>`.
//!
//! Scores are scoped per chat room, so the same player name in two rooms
//! keeps two independent totals.

/// Key for one player's score in one chat room.
pub fn score_key(namespace: &str, chat_id: i64, player: &str) -> String {
    format!("{}:{}:{}", namespace, chat_id, player)
}

/// Match pattern covering every player in a chat room.
pub fn chat_pattern(namespace: &str, chat_id: i64) -> String {
    format!("{}:{}:*", namespace, chat_id)
}

/// Recover the player name from a key, if it belongs to the given room.
///
/// Position-based, so player names containing `:` survive the round trip.
pub fn player_from_key(namespace: &str, chat_id: i64, key: &str) -> Option<String> {
    let prefix = format!("{}:{}:", namespace, chat_id);
    key.strip_prefix(&prefix).map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_key() {
        assert_eq!(score_key("trivia", 1001, "Alex Trebek"), "trivia:1001:Alex Trebek");
    }

    #[test]
    fn test_player_round_trip() {
        let key = score_key("trivia", 1001, "Alex Trebek");
        assert_eq!(
            player_from_key("trivia", 1001, &key).as_deref(),
            Some("Alex Trebek")
        );
    }

    #[test]
    fn test_player_with_colon() {
        let key = score_key("trivia", 1001, "a:b");
        assert_eq!(player_from_key("trivia", 1001, &key).as_deref(), Some("a:b"));
    }

    #[test]
    fn test_player_from_foreign_key() {
        assert!(player_from_key("trivia", 1001, "trivia:2002:Alex").is_none());
        assert!(player_from_key("trivia", 1001, "other:1001:Alex").is_none());
    }
}
