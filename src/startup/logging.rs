//! File-backed tracing setup.
//!
//! The TUI owns stdout, so log output goes to a file under the platform's
//! local data directory (`~/.local/share/trendboard/trendboard.log` on Linux).

use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const LOG_DIR_NAME: &str = "trendboard";
const LOG_FILE_NAME: &str = "trendboard.log";

/// Where logs go when no override is given.
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(LOG_DIR_NAME)
        .join(LOG_FILE_NAME)
}

/// Open `path` for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Parse a filter directive, falling back to `info` when it is invalid.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `path`.
///
/// Returns the path actually used. A second call is a no-op on the
/// subscriber (the first one wins) but still reports the path.
pub fn init_logging(directive: &str, path: &Path) -> io::Result<PathBuf> {
    let file = open_log_file(path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "trendboard logging initialised");
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_file_name() {
        let path = default_log_path();
        assert!(path.ends_with("trendboard/trendboard.log"));
    }

    #[test]
    fn test_open_log_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("app.log");
        let file = open_log_file(&path);
        assert!(file.is_ok());
        assert!(path.exists());
    }

    #[test]
    fn test_build_filter_falls_back() {
        // Invalid directive must not panic
        let _ = build_filter("trendboard=[[[");
        let _ = build_filter("trendboard=debug,reqwest=warn");
    }
}
