//! Vonage SMS delivery client.

mod client;
mod error;
mod types;

pub use client::VonageClient;
pub use error::VonageError;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_test_client(mock_server: &MockServer) -> VonageClient {
        VonageClient::new(
            mock_server.uri(),
            "test-key",
            "test-secret",
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_send_success_returns_message_id() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!({
            "message-count": "1",
            "messages": [{"status": "0", "message-id": "0A0000000123ABCD1"}]
        });

        Mock::given(method("POST"))
            .and(path("/sms/json"))
            .and(body_string_contains("api_key=test-key"))
            .and(body_string_contains("from=14155551212"))
            .and(body_string_contains("to=14155551213"))
            .and(body_string_contains("type=unicode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server).await;
        let result = client.send("14155551212", "14155551213", "hi").await;

        assert_eq!(result.unwrap(), "0A0000000123ABCD1");
    }

    #[tokio::test]
    async fn test_send_rejected_carries_error_text() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!({
            "message-count": "1",
            "messages": [{"status": "2", "error-text": "Missing to param"}]
        });

        Mock::given(method("POST"))
            .and(path("/sms/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server).await;
        let result = client.send("14155551212", "", "hi").await;

        match result {
            Err(VonageError::SendFailed(msg)) => assert_eq!(msg, "Missing to param"),
            other => panic!("expected SendFailed, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_send_empty_messages_is_api_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/sms/json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"messages": []})),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server).await;
        let result = client.send("14155551212", "14155551213", "hi").await;

        assert!(matches!(result, Err(VonageError::Api(_))));
    }

    #[tokio::test]
    async fn test_send_http_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/sms/json"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server).await;
        let result = client.send("14155551212", "14155551213", "hi").await;

        match result {
            Err(VonageError::Api(msg)) => assert_eq!(msg, "upstream down"),
            other => panic!("expected Api error, got {:?}", other),
        }
    }
}
