//! Tracing initialization.
//!
//! Installs an fmt subscriber filtered by `RUST_LOG`, defaulting to `info`
//! when unset. Called once from `main`; tests get their subscriber from
//! `test-log` instead.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_telemetry() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}
