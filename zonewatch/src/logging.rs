//! Logging setup for zonewatch.
//!
//! Structured logging goes to a session log file and, optionally, to
//! stderr so command output on stdout stays clean:
//! - The log file is truncated when a session starts
//! - File output is compact and uncolored, terminal output is pretty
//! - `RUST_LOG` overrides the default level

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::DEFAULT_LOG_FILE_NAME;

/// Guard that must be kept alive for the duration of logging.
///
/// Dropping this guard will flush and close the log file writer.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
    log_path: PathBuf,
}

impl LoggingGuard {
    /// Path of the session log file.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Output options for [`init_logging`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingOptions {
    /// Also write events to stderr.
    pub terminal: bool,
    /// Color the stderr output.
    pub ansi: bool,
    /// Default to `debug` instead of `info` when `RUST_LOG` is unset.
    pub debug: bool,
}

/// Initialize the global tracing subscriber.
///
/// Creates the parent directory of `log_path` if needed and clears any
/// previous contents of the file.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the log file
/// cannot be cleared.
pub fn init_logging(log_path: &Path, options: LoggingOptions) -> Result<LoggingGuard, io::Error> {
    let (log_dir, log_file) = split_log_path(log_path);

    fs::create_dir_all(&log_dir)?;
    fs::write(log_dir.join(&log_file), "")?;

    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .with_target(false);

    let terminal_layer = options.terminal.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_ansi(options.ansi)
            .pretty()
    });

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(options.debug)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(terminal_layer)
        .init();

    Ok(LoggingGuard {
        _file_guard: file_guard,
        log_path: log_dir.join(log_file),
    })
}

/// Default filter directive when `RUST_LOG` is not set.
pub fn default_level(debug: bool) -> &'static str {
    if debug {
        "debug"
    } else {
        "info"
    }
}

/// Split a log path into directory and file name.
///
/// A bare directory (trailing separator or no file name) gets the default
/// file name; a bare file name logs to the current directory.
fn split_log_path(log_path: &Path) -> (PathBuf, String) {
    let file = log_path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string());

    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    (dir, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), "info");
        assert_eq!(default_level(true), "debug");
    }

    #[test]
    fn test_split_log_path() {
        let (dir, file) = split_log_path(Path::new("/var/log/zonewatch/session.log"));
        assert_eq!(dir, PathBuf::from("/var/log/zonewatch"));
        assert_eq!(file, "session.log");
    }

    #[test]
    fn test_split_bare_file_name() {
        let (dir, file) = split_log_path(Path::new("zonewatch.log"));
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(file, "zonewatch.log");
    }

    #[test]
    fn test_split_root_uses_default_file_name() {
        let (_, file) = split_log_path(Path::new("/"));
        assert_eq!(file, DEFAULT_LOG_FILE_NAME);
    }

    #[test]
    fn test_nested_directory_and_truncation() {
        // init_logging installs a global subscriber, so only the file
        // preparation is exercised here
        let temp = TempDir::new().unwrap();
        let log_path = temp.path().join("deep/nested/zonewatch.log");
        let (dir, file) = split_log_path(&log_path);

        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(&file), "old session").unwrap();
        fs::write(dir.join(&file), "").unwrap();

        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
    }

    #[test]
    fn test_guard_exposes_log_path() {
        let (non_blocking, guard) = tracing_appender::non_blocking(io::sink());
        drop(non_blocking);

        let logging_guard = LoggingGuard {
            _file_guard: guard,
            log_path: PathBuf::from("logs/zonewatch.log"),
        };
        assert_eq!(logging_guard.log_path(), Path::new("logs/zonewatch.log"));
    }
}
