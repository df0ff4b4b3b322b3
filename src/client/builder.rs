use super::core::{ChatClient, CHAT_ENDPOINT, DEFAULT_TIMEOUT};
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::time::Duration;

/// Builder for [`ChatClient`].
///
/// Unlike [`ChatClient::new`], `build()` sets up the HTTP client eagerly and
/// reports a failure right away.
#[derive(Debug, Clone)]
pub struct ChatClientBuilder {
    base_url: Option<String>,
    endpoint_path: Option<String>,
    timeout: Duration,
}

impl ChatClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            endpoint_path: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Per-request timeout. Applies to every call made by the built client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the chat endpoint path (defaults to `/api/chat/v2`).
    pub fn endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<ChatClient> {
        let base_url = self.base_url.ok_or_else(|| {
            Error::configuration_with_context(
                "Base URL must be specified",
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_source("chat_client_builder"),
            )
        })?;
        if self.timeout.is_zero() {
            return Err(Error::configuration_with_context(
                "Timeout must be greater than zero",
                ErrorContext::new()
                    .with_field_path("timeout")
                    .with_source("chat_client_builder"),
            ));
        }
        let endpoint_path = self
            .endpoint_path
            .unwrap_or_else(|| CHAT_ENDPOINT.to_string());
        let endpoint_path = if endpoint_path.starts_with('/') {
            endpoint_path
        } else {
            format!("/{}", endpoint_path)
        };

        Ok(ChatClient {
            transport: HttpTransport::new(base_url, self.timeout)?,
            endpoint_path,
        })
    }
}

impl Default for ChatClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
