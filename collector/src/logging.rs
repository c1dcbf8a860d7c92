use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// Initialize structured logging on stderr so stdout only carries tables.
///
/// `RUST_LOG` overrides the default `info` filter.
pub fn init_logging() -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow!("failed to initialize logging: {err}"))?;

    tracing::debug!("logging initialized");

    Ok(())
}
