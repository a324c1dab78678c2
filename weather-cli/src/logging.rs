use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout carries only the report. Level comes from `RUST_LOG`, default `warn`.
pub fn init() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!("failed to initialise logging: {err}"))
}
