//! SendGrid mail delivery client.

mod client;
mod error;
mod types;

pub use client::SendGridClient;
pub use error::SendGridError;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn create_test_client(mock_server: &MockServer) -> SendGridClient {
        SendGridClient::new(mock_server.uri(), "SG.test-key", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_send_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/mail/send"))
            .and(header("authorization", "Bearer SG.test-key"))
            .respond_with(ResponseTemplate::new(202))
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server).await;
        let result = client
            .send(
                "14155551212@sms.example.com",
                "b@x.com",
                "Text message",
                "hi",
            )
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_send_builds_v3_payload() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/mail/send"))
            .and(body_partial_json(serde_json::json!({
                "personalizations": [{"to": [{"email": "b@x.com"}]}],
                "from": {"email": "14155551212@sms.example.com"},
                "subject": "Text message",
                "content": [{"type": "text/plain", "value": "hi"}]
            })))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server).await;
        client
            .send(
                "14155551212@sms.example.com",
                "b@x.com",
                "Text message",
                "hi",
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_send_failure_carries_provider_text() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v3/mail/send"))
            .respond_with(
                ResponseTemplate::new(400).set_body_string("does not contain a valid address"),
            )
            .mount(&mock_server)
            .await;

        let client = create_test_client(&mock_server).await;
        let result = client.send("a@x.com", "broken", "Text message", "hi").await;

        match result {
            Err(SendGridError::SendFailed(msg)) => {
                assert!(msg.contains("valid address"));
            }
            other => panic!("expected SendFailed, got {:?}", other.map(|_| ())),
        }
    }
}
