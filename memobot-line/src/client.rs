//! LINE Messaging API client: text replies and rich-menu linking.
//!
//! Implements the core transport traits over reqwest with channel-token
//! bearer auth. The base URL is overridable for tests.

use async_trait::async_trait;
use memobot_core::{MenuLinker, ReplySender, TransportError};
use serde_json::json;
use tracing::debug;

const DEFAULT_API_URL: &str = "https://api.line.me";

/// HTTP implementation of [`ReplySender`] and [`MenuLinker`].
#[derive(Clone)]
pub struct HttpLineClient {
    http: reqwest::Client,
    channel_token: String,
    base_url: String,
}

impl HttpLineClient {
    pub fn new(channel_token: String) -> Self {
        Self::with_base_url(channel_token, DEFAULT_API_URL.to_string())
    }

    /// Uses a non-default API endpoint (tests, regional endpoints).
    pub fn with_base_url(channel_token: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            channel_token,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn post(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<(), TransportError> {
        let mut request = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .bearer_auth(&self.channel_token);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransportError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        debug!(path = %path, status = %status, "LINE API call succeeded");
        Ok(())
    }
}

#[async_trait]
impl ReplySender for HttpLineClient {
    async fn reply(&self, reply_token: &str, text: &str) -> Result<(), TransportError> {
        let body = json!({
            "replyToken": reply_token,
            "messages": [{"type": "text", "text": text}],
        });
        self.post("/v2/bot/message/reply", Some(body)).await
    }
}

#[async_trait]
impl MenuLinker for HttpLineClient {
    async fn link_menu(&self, user_id: &str, menu_id: &str) -> Result<(), TransportError> {
        let path = format!("/v2/bot/user/{}/richmenu/{}", user_id, menu_id);
        self.post(&path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_new_uses_default_endpoint() {
        let client = HttpLineClient::new("token".to_string());
        assert_eq!(client.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let client =
            HttpLineClient::with_base_url("token".to_string(), "http://localhost:9000/".to_string());
        assert_eq!(client.base_url, "http://localhost:9000");
    }

    #[tokio::test]
    async fn test_reply_posts_reply_token_and_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v2/bot/message/reply")
            .match_header("authorization", "Bearer test-token")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "replyToken": "rt-1",
                "messages": [{"type": "text", "text": "hi"}],
            })))
            .with_status(200)
            .create_async()
            .await;

        let client = HttpLineClient::with_base_url("test-token".to_string(), server.url());
        client.reply("rt-1", "hi").await.expect("Reply failed");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_link_menu_posts_to_user_richmenu_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v2/bot/user/U123/richmenu/richmenu-1")
            .with_status(200)
            .create_async()
            .await;

        let client = HttpLineClient::with_base_url("test-token".to_string(), server.url());
        client
            .link_menu("U123", "richmenu-1")
            .await
            .expect("Link failed");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_platform_rejection_surfaces_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v2/bot/message/reply")
            .with_status(400)
            .create_async()
            .await;

        let client = HttpLineClient::with_base_url("test-token".to_string(), server.url());
        let err = client
            .reply("rt-1", "hi")
            .await
            .expect_err("Expected an error");

        assert!(matches!(err, TransportError::Status(400)));
    }
}
