//! Tracing subscriber setup for the `tour` binary.
//!
//! Events go to stderr so stdout carries only tour output.

use std::fmt;
use std::str::FromStr;

use tour_foundation::{Error, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Verbosity of the tracing subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Informational events.
    Info,
    /// Lesson start/finish events.
    Debug,
    /// Everything, including per-value events.
    Trace,
}

impl LogLevel {
    fn directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.directive())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            other => Err(Error::invalid_argument(format!("invalid log level: {other}"))),
        }
    }
}

/// Picks the filter for a run.
///
/// An explicit level wins. Otherwise `--trace` means `debug`, and without
/// it the `RUST_LOG` environment variable is honoured, falling back to `warn`.
#[must_use]
pub fn filter_for(level: Option<LogLevel>, trace: bool) -> EnvFilter {
    match (level, trace) {
        (Some(level), _) => EnvFilter::new(level.directive()),
        (None, true) => EnvFilter::new(LogLevel::Debug.directive()),
        (None, false) => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(LogLevel::Warn.directive())),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(level: Option<LogLevel>, trace: bool) -> Result<()> {
    let formatter = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true);

    tracing_subscriber::registry()
        .with(formatter)
        .with(filter_for(level, trace))
        .try_init()
        .map_err(|e| Error::new(tour_foundation::ErrorKind::Internal(e.to_string())))
}
