//! Process bootstrap: environment loading and log setup.
//!
//! None of this is needed to use [`ChatClient`]; it only turns the process
//! environment into a base URL and installs a JSON log subscriber.

use crate::{ChatClient, Error, ErrorContext, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

pub const BASE_URL_VAR: &str = "BOOST_BASE_URL";
pub const TIMEOUT_VAR: &str = "BOOST_TIMEOUT_SECS";

/// Install a JSON `tracing` subscriber filtered by `RUST_LOG`.
///
/// Defaults to `debug`. Returns `false` if a global subscriber was already set.
pub fn init_tracing() -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}

/// Load variables from a `.env` file in the current directory or a parent.
pub fn load_dotenv() -> Result<PathBuf> {
    dotenvy::dotenv().map_err(|e| dotenv_error(e, ErrorContext::new()))
}

/// Load variables from the given env file.
pub fn load_dotenv_from(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    dotenvy::from_path(path).map_err(|e| {
        dotenv_error(
            e,
            ErrorContext::new().with_field_path(path.display().to_string()),
        )
    })
}

fn dotenv_error(e: dotenvy::Error, context: ErrorContext) -> Error {
    Error::configuration_with_context(
        "Error loading .env file",
        context.with_details(e.to_string()).with_source("bootstrap"),
    )
}

/// Settings needed to construct a [`ChatClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapConfig {
    pub base_url: String,
    pub timeout: Option<Duration>,
}

impl BootstrapConfig {
    /// Read `BOOST_BASE_URL` and the optional `BOOST_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup(BASE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                Error::configuration_with_context(
                    format!("{} must be set", BASE_URL_VAR),
                    ErrorContext::new()
                        .with_field_path(BASE_URL_VAR)
                        .with_source("bootstrap"),
                )
            })?;

        let timeout = match lookup(TIMEOUT_VAR) {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| {
                    Error::configuration_with_context(
                        format!("{} must be a positive integer", TIMEOUT_VAR),
                        ErrorContext::new()
                            .with_field_path(TIMEOUT_VAR)
                            .with_details(raw.clone())
                            .with_source("bootstrap"),
                    )
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self { base_url, timeout })
    }

    pub fn into_client(self) -> Result<ChatClient> {
        let mut builder = ChatClient::builder().base_url(self.base_url);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

/// Read only the base URL from `BOOST_BASE_URL`.
pub fn base_url_from_env() -> Result<String> {
    BootstrapConfig::from_env().map(|c| c.base_url)
}
