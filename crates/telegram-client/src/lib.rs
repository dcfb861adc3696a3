//! Telegram Bot API client.

mod client;
mod error;
mod types;

pub use client::TelegramClient;
pub use error::TelegramError;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_test_client(mock_server: &MockServer) -> TelegramClient {
        TelegramClient::new("TESTTOKEN", mock_server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_health_check_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/botTESTTOKEN/getMe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": {"id": 42, "first_name": "quizbot", "username": "quizbot"}
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        assert!(client.health_check().await);
    }

    #[tokio::test]
    async fn test_health_check_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/botTESTTOKEN/getMe"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "ok": false,
                "description": "Unauthorized"
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        assert!(!client.health_check().await);
    }

    #[tokio::test]
    async fn test_send_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/botTESTTOKEN/sendMessage"))
            .and(body_json(serde_json::json!({
                "chat_id": 1001,
                "text": "Correct",
                "reply_to_message_id": 7
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": {"message_id": 8, "chat": {"id": 1001}}
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.send_message(1001, "Correct", Some(7)).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_send_message_api_rejection() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/botTESTTOKEN/sendMessage"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "ok": false,
                "description": "Bad Request: chat not found"
            })))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.send_message(1001, "hello", None).await;

        match result {
            Err(TelegramError::SendFailed(msg)) => {
                assert_eq!(msg, "Bad Request: chat not found");
            }
            other => panic!("expected SendFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_set_webhook() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/botTESTTOKEN/setWebhook"))
            .and(body_json(serde_json::json!({
                "url": "https://bot.example.com/abcd"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ok": true,
                "result": true
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server);
        let result = client.set_webhook("https://bot.example.com/abcd").await;

        assert!(result.is_ok());
    }

    #[test]
    fn test_inbound_message_from_update() {
        let update: Update = serde_json::from_value(serde_json::json!({
            "update_id": 1,
            "message": {
                "message_id": 7,
                "from": {"first_name": "Alex", "last_name": "Trebek"},
                "chat": {"id": 1001},
                "text": "/jeopardy"
            }
        }))
        .unwrap();

        let inbound = InboundMessage::from_update(&update).unwrap();
        assert_eq!(inbound.chat_id, 1001);
        assert_eq!(inbound.message_id, 7);
        assert_eq!(inbound.text, "/jeopardy");
        assert_eq!(inbound.sender, "Alex Trebek");
    }

    #[test]
    fn test_inbound_message_first_name_only() {
        let update: Update = serde_json::from_value(serde_json::json!({
            "update_id": 1,
            "message": {
                "message_id": 7,
                "from": {"first_name": "Alex"},
                "chat": {"id": 1001},
                "text": "hi"
            }
        }))
        .unwrap();

        let inbound = InboundMessage::from_update(&update).unwrap();
        assert_eq!(inbound.sender, "Alex");
    }

    #[test]
    fn test_inbound_message_non_text() {
        // Sticker-style update: message present, text absent.
        let update: Update = serde_json::from_value(serde_json::json!({
            "update_id": 1,
            "message": {
                "message_id": 7,
                "from": {"first_name": "Alex"},
                "chat": {"id": 1001}
            }
        }))
        .unwrap();

        assert!(InboundMessage::from_update(&update).is_none());
    }

    #[test]
    fn test_inbound_message_no_message() {
        let update: Update =
            serde_json::from_value(serde_json::json!({"update_id": 1})).unwrap();
        assert!(InboundMessage::from_update(&update).is_none());
    }
}
