//! HTTP client for the trivia question source.

mod client;
mod error;
mod types;

pub use client::TriviaClient;
pub use error::TriviaError;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sample_question() -> serde_json::Value {
        serde_json::json!({
            "round": "Jeopardy!",
            "value": 200,
            "category": "WORLD GEOGRAPHY",
            "date": "1996-12-06",
            "question": "The tallest mountain on Earth",
            "answer": "Mount Everest"
        })
    }

    #[tokio::test]
    async fn test_fetch_question() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/question"))
            .respond_with(ResponseTemplate::new(200).set_body_json(sample_question()))
            .mount(&mock_server)
            .await;

        let client = TriviaClient::new(
            format!("{}/question", mock_server.uri()),
            Duration::from_secs(5),
        )
        .unwrap();

        let fetched = client.fetch_question().await.unwrap();
        assert_eq!(fetched.question.answer, "Mount Everest");
        assert_eq!(fetched.question.value, 200);
        // Raw payload keeps the upstream fields for later reports.
        assert!(fetched.raw.contains("WORLD GEOGRAPHY"));
    }

    #[tokio::test]
    async fn test_fetch_question_preserves_unmodeled_fields() {
        let mock_server = MockServer::start().await;

        let mut payload = sample_question();
        payload["show_number"] = serde_json::json!(2825);

        Mock::given(method("GET"))
            .and(path("/question"))
            .respond_with(ResponseTemplate::new(200).set_body_json(payload))
            .mount(&mock_server)
            .await;

        let client = TriviaClient::new(
            format!("{}/question", mock_server.uri()),
            Duration::from_secs(5),
        )
        .unwrap();

        let fetched = client.fetch_question().await.unwrap();
        assert!(fetched.raw.contains("show_number"));
    }

    #[tokio::test]
    async fn test_fetch_question_upstream_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/question"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&mock_server)
            .await;

        let client = TriviaClient::new(
            format!("{}/question", mock_server.uri()),
            Duration::from_secs(5),
        )
        .unwrap();

        match client.fetch_question().await {
            Err(TriviaError::Api { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }
}
