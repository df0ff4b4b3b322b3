use super::TransportError;
use crate::{Error, Result};
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

/// Raw response of a successful POST.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    // A setup failure is kept and reported on first use so that infallible
    // constructors never panic.
    client: std::result::Result<reqwest::blocking::Client, String>,
    base_url: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Self::build_client(timeout).map_err(|e| {
            Error::configuration(format!("Failed to create HTTP client: {}", e))
        })?;
        Ok(Self {
            client: Ok(client),
            base_url: base_url.into(),
            timeout,
        })
    }

    pub(crate) fn new_deferred(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Self::build_client(timeout).map_err(|e| e.to_string()),
            base_url: base_url.into(),
            timeout,
        }
    }

    fn build_client(timeout: Duration) -> reqwest::Result<reqwest::blocking::Client> {
        reqwest::blocking::Client::builder().timeout(timeout).build()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// POST a JSON body and return the raw response.
    ///
    /// Exactly one request is attempted. A non-success status is returned as
    /// [`TransportError::Status`] without looking at the body's shape.
    pub fn post_json(
        &self,
        path: &str,
        body: Vec<u8>,
    ) -> std::result::Result<HttpResponse, TransportError> {
        let client = self
            .client
            .as_ref()
            .map_err(|e| TransportError::Setup(e.clone()))?;
        let url = self.url_for(path);

        let response = client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()?;

        let status = response.status();
        let body = response.bytes()?.to_vec();
        debug!(url = %url, status = status.as_u16(), bytes = body.len(), "received chat response");

        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        Ok(HttpResponse {
            status: status.as_u16(),
            body,
        })
    }
}
