//! Tracing setup for the `roster` binary.
//!
//! Log lines go to stderr so command output on stdout stays clean. The
//! configured level is the default filter; `RUST_LOG` directives refine it.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::error::AppError;

/// Install the global subscriber at `level` (`off`, `error`, `warn`, `info`,
/// `debug` or `trace`, any case).
///
/// An unrecognised level is rejected before anything global is touched.
pub fn init(level: &str) -> Result<(), AppError> {
    let default = level_filter(level)?;
    let filter = EnvFilter::builder()
        .with_default_directive(default.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Logger(format!("cannot install subscriber: {e}")))
}

fn level_filter(level: &str) -> Result<LevelFilter, AppError> {
    let level = level.trim();
    // `LevelFilter` also reads "" as error and digits as levels; config
    // only speaks names.
    if level.is_empty() || level.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::Logger(format!("unrecognised log level: '{level}'")));
    }
    level
        .parse()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}
