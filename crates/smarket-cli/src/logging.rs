//! Tracing subscriber setup.
//!
//! `RUST_LOG` wins when set (e.g. `RUST_LOG=smarket_core=debug`); otherwise
//! the `--log-level` value is used. Logs go to stderr so they never mix with
//! command output.

use tracing_subscriber::fmt;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

pub fn init_logging(default_level: &str) -> Result<(), CliError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)
            .map_err(|error| CliError::Logging(format!("{default_level}: {error}")))?,
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|error| CliError::Logging(error.to_string()))
}
