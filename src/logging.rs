use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};
use crate::settings::Settings;

/// Installs a formatting subscriber filtered by `settings.log_filter`.
/// Does nothing if the process already has a global subscriber.
pub fn init(settings: &Settings) -> Result<()> {
    let filter = EnvFilter::try_new(&settings.log_filter)
        .map_err(|e| Error::Config(format!("invalid log filter '{}': {}", settings.log_filter, e)))?;
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_err() {
        debug!("a global subscriber is already installed");
    }
    Ok(())
}
