use crate::transport::TransportError;
use thiserror::Error;

/// Structured error context for debugging failed chat calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "BOOST_BASE_URL", "response.conversation")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., HTTP status, body excerpt)
    pub details: Option<String>,
    /// Source of the error (e.g., "chat_client", "bootstrap")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Error type for every chat client operation.
///
/// Transport and parse failures are kept apart so callers can decide on their
/// own retry policy; the client itself never retries.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Response parse error: {message}{}", format_context(.context))]
    Parse {
        message: String,
        context: ErrorContext,
        #[source]
        source: Option<serde_json::Error>,
    },

    #[error("Command serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },
}

fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

impl Error {
    pub fn parse_with_context(
        msg: impl Into<String>,
        context: ErrorContext,
        source: Option<serde_json::Error>,
    ) -> Self {
        Error::Parse {
            message: msg.into(),
            context,
            source,
        }
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::configuration_with_context(msg, ErrorContext::new())
    }

    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse { .. })
    }

    /// True when the request ran into the client timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Transport(TransportError::Http(e)) => e.is_timeout(),
            _ => false,
        }
    }

    /// HTTP status of a non-success response, if that is what failed.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(TransportError::Status { status, .. }) => Some(*status),
            _ => None,
        }
    }

    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Parse { context, .. } | Error::Configuration { context, .. } => Some(context),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_includes_context() {
        let err = Error::parse_with_context(
            "empty response body",
            ErrorContext::new()
                .with_details("status 200")
                .with_source("chat_client"),
            None,
        );
        assert_eq!(
            err.to_string(),
            "Response parse error: empty response body (details: status 200, source: chat_client)"
        );
        assert!(err.is_parse());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_status_error_classification() {
        let err = Error::from(TransportError::Status {
            status: 503,
            body: "unavailable".to_string(),
        });
        assert!(err.is_transport());
        assert!(!err.is_timeout());
        assert_eq!(err.status(), Some(503));
        assert!(err.context().is_none());
    }

    #[test]
    fn test_configuration_error_without_context() {
        let err = Error::configuration("base URL must be specified");
        assert_eq!(
            err.to_string(),
            "Configuration error: base URL must be specified"
        );
        assert_eq!(err.context(), Some(&ErrorContext::new()));
    }
}
