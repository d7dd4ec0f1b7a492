//! Logging configuration for the bytecode-match CLI tool.
//!
//! Provides CLI arguments for configuring tracing/logging output with support for:
//! - Verbosity levels via `-v/-vv/-vvv` flags
//! - Custom log filters via `RUST_LOG` environment variable
//! - Log file output via `--log.file` flag
//! - Disabling colors via `--log.no-color` flag
//!
//! Logs always go to stderr or the log file; stdout is reserved for status lines.

use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::{fmt, EnvFilter};

/// Logging configuration arguments.
#[derive(Debug, Clone, Default, Parser)]
pub struct LogArgs {
    /// Increase logging verbosity (default = warn, -v = info, -vv = debug, -vvv = trace)
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log file path. If specified, logs are written to this file instead of stderr.
    #[arg(long = "log.file", visible_aliases = ["log-file"], global = true)]
    pub log_file: Option<PathBuf>,

    /// Disable colorful console logging. Only applies when logging to stderr (no --log.file).
    #[arg(long = "log.no-color", visible_aliases = ["log-no-color"], global = true)]
    pub log_no_color: bool,
}

impl LogArgs {
    /// Level selected by the `-v` flags.
    pub const fn level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Initialize the tracing subscriber based on the logging configuration.
    ///
    /// The log level is determined in the following order of precedence:
    /// 1. `RUST_LOG` environment variable (if set)
    /// 2. `-v` flags (increases from WARN to INFO/DEBUG/TRACE)
    ///
    /// Log target is only shown for DEBUG level and above.
    /// If `--log.file` is specified and can be created, logs are written to the file
    /// instead of stderr.
    pub fn init(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            EnvFilter::new(format!("bytecode_match={}", self.level()))
        };

        let show_target = self.verbose >= 2;

        let file = self.log_file.as_ref().and_then(|path| match std::fs::File::create(path) {
            Ok(file) => Some(file),
            Err(err) => {
                eprintln!("Failed to create log file {}: {err}, logging to stderr", path.display());
                None
            }
        });

        if let Some(file) = file {
            fmt()
                .with_env_filter(filter)
                .with_target(show_target)
                .with_writer(file)
                .with_ansi(false)
                .init();
        } else {
            fmt()
                .with_env_filter(filter)
                .with_target(show_target)
                .with_writer(std::io::stderr)
                .with_ansi(!self.log_no_color)
                .init();
        }
    }
}
