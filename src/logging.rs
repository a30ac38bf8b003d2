// Debug logging for Rally Pong
// File-backed tracing output, enabled with the --debug flag
//
// The terminal belongs to the TUI while a match runs, so nothing is ever
// written to stdout or stderr. With logging disabled no subscriber is
// installed and every tracing macro is a no-op.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::SystemTime;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "rally-pong-debug.log";

/// Filter used when RUST_LOG is not set
pub const DEFAULT_FILTER: &str = "rally_pong=debug";

/// Location of the debug log
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join(LOG_FILE_NAME)
}

/// Initialize debug logging to file
///
/// # Arguments
/// * `enabled` - Whether debug logging should be enabled (controlled by --debug flag)
///
/// # Behavior
/// - If enabled=false: Returns `Ok(None)`, no file created
/// - If enabled=true: Creates/truncates the log file, writes a header and
///   installs a global subscriber. Returns the file path.
pub fn init(enabled: bool) -> Result<Option<PathBuf>> {
    if !enabled {
        return Ok(None);
    }

    let path = log_file_path();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("failed to open debug log {}", path.display()))?;

    writeln!(file, "=== Rally Pong Debug Log ===")?;
    writeln!(file, "Session started: {:?}", SystemTime::now())?;
    writeln!(file, "To monitor: tail -f {}", path.display())?;
    writeln!(file, "========================================\n")?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "debug logging initialized");
    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logging_creates_nothing() {
        assert_eq!(init(false).unwrap(), None);
    }

    #[test]
    fn test_log_path_is_in_temp_dir() {
        let path = log_file_path();
        assert!(path.starts_with(std::env::temp_dir()));
        assert!(path.ends_with(LOG_FILE_NAME));
    }
}
