//! Bootstraps a chat client from the environment and reports what it found.
//! Makes no network calls.

use anyhow::Context;
use boostai_client::bootstrap::{self, BootstrapConfig};
use tracing::{debug, warn};

fn main() -> anyhow::Result<()> {
    bootstrap::init_tracing();
    debug!("Start of boost ai conversation");

    if let Err(e) = bootstrap::load_dotenv() {
        warn!(error = %e, "continuing without .env file");
    }

    let config = BootstrapConfig::from_env().context("reading chat client configuration")?;
    debug!(base_url = %config.base_url, "Base url");

    let client = config.into_client().context("building chat client")?;
    debug!(
        endpoint = %client.endpoint_url(),
        timeout_secs = client.timeout().as_secs(),
        "chat client ready"
    );
    Ok(())
}
