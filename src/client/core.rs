use crate::transport::{HttpResponse, HttpTransport};
use crate::types::{Command, ConversationReply, PostCommand};
use crate::{Error, ErrorContext, Result};
use std::time::Duration;
use tracing::{debug, warn};

/// Relative path of the chat endpoint on the vendor host.
pub const CHAT_ENDPOINT: &str = "/api/chat/v2";

/// Per-request timeout used unless the builder overrides it.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Longest body excerpt kept in a parse error.
const BODY_EXCERPT_LEN: usize = 200;

/// Blocking client for the boost.ai chat API.
///
/// The client keeps no conversation state: every call issues exactly one
/// POST and the caller carries the conversation id between calls. It is
/// cheap to clone and safe to share across threads.
#[derive(Debug, Clone)]
pub struct ChatClient {
    pub(crate) transport: HttpTransport,
    pub(crate) endpoint_path: String,
}

impl ChatClient {
    /// Create a client for `base_url` with the default timeout.
    ///
    /// Nothing is validated here. A malformed URL, or an HTTP client that
    /// could not be set up, is reported as a transport error on first use.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            transport: HttpTransport::new_deferred(base_url, DEFAULT_TIMEOUT),
            endpoint_path: CHAT_ENDPOINT.to_string(),
        }
    }

    pub fn builder() -> super::ChatClientBuilder {
        super::ChatClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        self.transport.base_url()
    }

    pub fn timeout(&self) -> Duration {
        self.transport.timeout()
    }

    pub fn endpoint_url(&self) -> String {
        self.transport.url_for(&self.endpoint_path)
    }

    pub fn start_conversation(&self) -> Result<ConversationReply> {
        self.send_command(&Command::start())
    }

    /// Start a conversation restricted to the given filter values.
    ///
    /// An empty list behaves like [`start_conversation`](Self::start_conversation).
    pub fn start_conversation_with_filters<S: AsRef<str>>(
        &self,
        filter_values: &[S],
    ) -> Result<ConversationReply> {
        let filter_values = filter_values
            .iter()
            .map(|f| f.as_ref().to_string())
            .collect();
        self.send_command(&Command::start_with_filters(filter_values))
    }

    pub fn send_message(&self, message: &str, conversation_id: &str) -> Result<ConversationReply> {
        self.send_command(&Command::post_text(message, conversation_id))
    }

    /// Send a message on behalf of a phone caller (e.g. an SMS channel).
    pub fn send_message_from_phone(
        &self,
        message: &str,
        conversation_id: &str,
        client_phone: &str,
    ) -> Result<ConversationReply> {
        let command = PostCommand::text(message, conversation_id).with_client_phone(client_phone);
        self.send_command(&command.into())
    }

    /// Serialize, POST and decode a single command. Never retries.
    pub fn send_command(&self, command: &Command) -> Result<ConversationReply> {
        let body = command.to_json()?;
        debug!(
            command = command.kind(),
            url = %self.endpoint_url(),
            "sending chat command"
        );

        let response = self
            .transport
            .post_json(&self.endpoint_path, body)
            .map_err(|e| {
                warn!(command = command.kind(), error = %e, "chat request failed");
                Error::Transport(e)
            })?;

        decode_reply(&response).map_err(|e| {
            warn!(command = command.kind(), error = %e, "failed to decode chat reply");
            e
        })
    }
}

fn decode_reply(response: &HttpResponse) -> Result<ConversationReply> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Err(Error::parse_with_context(
            "empty response body",
            ErrorContext::new()
                .with_details(format!("status {}", response.status))
                .with_source("chat_client"),
            None,
        ));
    }

    serde_json::from_slice(&response.body).map_err(|e| {
        Error::parse_with_context(
            format!("invalid conversation reply: {}", e),
            ErrorContext::new()
                .with_details(body_excerpt(&response.body))
                .with_source("chat_client"),
            Some(e),
        )
    })
}

fn body_excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let cut = text.char_indices().nth(BODY_EXCERPT_LEN).map(|(idx, _)| idx);
    match cut {
        Some(idx) => format!("{}...", &text[..idx]),
        None => text.into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_new_uses_defaults() {
        let client = ChatClient::new("https://boost.ai");
        assert_eq!(client.base_url(), "https://boost.ai");
        assert_eq!(client.timeout(), Duration::from_secs(10));
        assert_eq!(client.endpoint_url(), "https://boost.ai/api/chat/v2");
    }

    #[test]
    fn test_decode_empty_body_is_parse_error() {
        let err = decode_reply(&response("")).unwrap_err();
        assert!(err.is_parse());
        let err = decode_reply(&response("  \n")).unwrap_err();
        assert!(err.is_parse());
    }

    #[test]
    fn test_decode_malformed_body_is_parse_error() {
        let err = decode_reply(&response(r#"{"conversation": "#)).unwrap_err();
        assert!(err.is_parse());
        assert_eq!(
            err.context().and_then(|c| c.source.as_deref()),
            Some("chat_client")
        );
    }

    #[test]
    fn test_body_excerpt_truncates_on_char_boundary() {
        let long = "é".repeat(BODY_EXCERPT_LEN + 10);
        let excerpt = body_excerpt(long.as_bytes());
        assert_eq!(excerpt.chars().count(), BODY_EXCERPT_LEN + 3);
        assert!(excerpt.ends_with("..."));
        assert_eq!(body_excerpt(b"short"), "short");
    }
}
