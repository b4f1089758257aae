//! `tracing` setup for the `freefall` binary.
//!
//! Diagnostics go to stderr; stdout is reserved for tables, JSON and the
//! paths of written report files.

use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How much diagnostic output `-q` / `-v` ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// `-q`: errors only.
    Quiet,
    /// No flag: progress messages such as the written report paths.
    #[default]
    Normal,
    /// `-v`: configuration and per-chart details.
    Verbose,
    /// `-vv` and up: curve sampling and every internal step.
    Trace,
}

impl Verbosity {
    /// The most detailed level that is still emitted.
    #[must_use]
    pub fn to_level_filter(&self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }
}

/// Filter directive used when `RUST_LOG` is unset, e.g. `freefall=INFO`.
fn default_directive(verbosity: Verbosity) -> String {
    format!("freefall={}", verbosity.to_level_filter())
}

/// Install the global subscriber.
///
/// A non-empty, parseable `RUST_LOG` wins over `verbosity`. Calling this
/// again after a subscriber is installed does nothing.
///
/// # Examples
///
/// ```no_run
/// use freefall::{init_logging, logging::Verbosity};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let output = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(output)
        .try_init();
}

/// Warn-level subscriber that writes through the test harness.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}
