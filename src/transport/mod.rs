//! Blocking HTTP transport used by the chat client.

mod http;

pub use http::{HttpResponse, HttpTransport};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP client setup failed: {0}")]
    Setup(String),
}
