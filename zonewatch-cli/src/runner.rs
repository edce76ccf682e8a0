//! CLI runner for common setup.
//!
//! Encapsulates config loading and logging initialization so command
//! handlers start from the same state.

use crate::error::CliError;
use tracing::info;
use zonewatch::config::ConfigFile;
use zonewatch::logging::{init_logging, LoggingGuard, LoggingOptions};

/// Runner that manages CLI lifecycle.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// The session log always gets every event. Terminal logging goes to
    /// stderr and only with `--debug`, so stdout carries nothing but
    /// command output.
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load()?;

        let options = logging_options(debug_mode, atty::is(atty::Stream::Stderr));

        let logging_guard = init_logging(&config.logging.file, options)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("zonewatch v{}", zonewatch::VERSION);
        info!(
            log_file = %self.logging_guard.log_path().display(),
            "zonewatch CLI: {} command", command
        );
    }
}

/// Logging options for a run. ANSI colors only when stderr is a terminal.
fn logging_options(debug_mode: bool, stderr_is_tty: bool) -> LoggingOptions {
    LoggingOptions {
        terminal: debug_mode,
        ansi: stderr_is_tty,
        debug: debug_mode,
    }
}
