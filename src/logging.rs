//! Log file setup for the terminal binary.
//!
//! The game owns the terminal, so nothing is written to stdout or stderr.
//! Set `MEMORY_LOG_PATH` to capture `tracing` output in a file; the level is
//! taken from `RUST_LOG` (default `info`).

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable naming the log file.
pub const LOG_PATH_VAR: &str = "MEMORY_LOG_PATH";

const DEFAULT_FILTER: &str = "info";

/// Install a file subscriber if `MEMORY_LOG_PATH` is set.
///
/// Returns `Ok(false)` when logging stays disabled.
pub fn init_from_env() -> Result<bool> {
    match std::env::var_os(LOG_PATH_VAR) {
        Some(path) if !path.is_empty() => {
            init_to_file(Path::new(&path))?;
            Ok(true)
        }
        _ => Ok(false),
    }
}

/// Install a global subscriber writing plain-text lines to `path`.
pub fn init_to_file(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating log file {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("installing tracing subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
