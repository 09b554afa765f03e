use crate::config::Settings;
use crate::error::{CalcError, Result};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr so they never interleave with the console report.
pub fn init(settings: &Settings) -> Result<()> {
    let env_filter = EnvFilter::try_new(settings.log_level).map_err(|err| {
        CalcError::Telemetry(format!("log filter '{}': {err}", settings.log_level))
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(|err| CalcError::Telemetry(err.to_string()))
}
