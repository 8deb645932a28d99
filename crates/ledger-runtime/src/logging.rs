//! Logging setup for the runtime binary.

use crate::config::ConfigError;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Install the global `tracing` subscriber. Output goes to stderr so that
/// stdout carries only invocation results.
pub fn init_logging(level: &str) -> Result<(), ConfigError> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| ConfigError::Invalid(format!("logging.level {level:?}: {e}")))?;
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ConfigError::Invalid(format!("logging already initialized: {e}")))
}
