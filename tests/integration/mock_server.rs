//! Mock HTTP server setup for integration tests

use boostai_client::ChatClient;
use mockito::{Matcher, Mock, Server, ServerGuard};

pub const CHAT_PATH: &str = "/api/chat/v2";

pub const HI_THERE_REPLY: &str = r#"{"conversation": {"id": "1"}, "response": {"avatar_url": "http://avatar.com/person.png", "elements": [{"payload": {"text": "Hi there"}}]}}"#;

/// Test fixture that manages a mock chat server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub fn new() -> Self {
        let server = Server::new();
        let base_url = server.url();
        Self { server, base_url }
    }

    pub fn client(&self) -> ChatClient {
        ChatClient::new(&self.base_url)
    }

    /// Expect exactly one JSON POST whose body matches `body`, answered with `reply`.
    pub fn mock_chat(&mut self, body: Matcher, status: usize, reply: &str) -> Mock {
        self.server
            .mock("POST", CHAT_PATH)
            .match_header("content-type", "application/json")
            .match_body(body)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(reply)
            .expect(1)
            .create()
    }
}
