//! Stderr logging behind the `log` facade.
//!
//! Library code logs through `log::debug!` and friends. The CLI picks a
//! [`LogLevel`] from its flags or `FLATMASK_LOG_MODE`, and installs a
//! [`Logger`] that prints matching records to stderr as `LEVEL: message`.

use std::env;
use std::str::FromStr;

use crate::Error;

/// Environment variable consulted by [`init_logger`].
pub const LOG_MODE_ENV: &str = "FLATMASK_LOG_MODE";

/// Output verbosity, ordered from least to most verbose.
///
/// # Examples
///
/// ```
/// use flatmask::LogLevel;
///
/// assert!(LogLevel::Quiet < LogLevel::Normal);
/// assert_eq!("VERBOSE".parse::<LogLevel>().unwrap(), LogLevel::Verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Nothing on stderr.
    Quiet,
    /// Errors and warnings.
    Normal,
    /// Everything down to debug records.
    Verbose,
}

impl LogLevel {
    /// The most verbose `log` level shown at this setting.
    #[must_use]
    pub const fn filter(self) -> log::LevelFilter {
        match self {
            Self::Quiet => log::LevelFilter::Off,
            Self::Normal => log::LevelFilter::Warn,
            Self::Verbose => log::LevelFilter::Debug,
        }
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s.trim().to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(Error::Validation {
                field: LOG_MODE_ENV.to_string(),
                message: format!("unknown log mode '{s}' (expected quiet, normal, or verbose)"),
            }),
        }
    }
}

/// A `log` backend writing to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a logger showing records allowed at `level`.
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the configured level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Registers this logger as the global `log` backend.
    ///
    /// # Errors
    ///
    /// Returns an error if a global logger has already been set.
    pub fn install(self) -> Result<(), log::SetLoggerError> {
        let filter = self.level.filter();
        log::set_boxed_logger(Box::new(self))?;
        log::set_max_level(filter);
        Ok(())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

impl log::Log for Logger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= self.level.filter()
    }

    fn log(&self, record: &log::Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}: {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

/// Picks the log level: `verbose` wins over `quiet`, either flag wins over
/// `FLATMASK_LOG_MODE`, and an unset or unknown mode means Normal.
///
/// # Examples
///
/// ```
/// use flatmask::{init_logger, LogLevel};
///
/// assert_eq!(init_logger(true, false).level(), LogLevel::Verbose);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    let level = env::var(LOG_MODE_ENV)
        .ok()
        .and_then(|mode| mode.parse().ok())
        .unwrap_or(LogLevel::Normal);
    Logger::new(level)
}
