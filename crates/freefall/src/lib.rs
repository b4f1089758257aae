//! `freefall` - Charts and residuals for a free-fall experiment
//!
//! This library holds a fixed set of free-fall measurements, samples the
//! model h = ½gt² over the same time span, and renders both as SVG charts,
//! terminal tables and an HTML report.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod experiment;
pub mod format;
pub mod logging;
pub mod render;

pub use config::Config;
pub use error::{Error, Result};
pub use experiment::{Sample, GRAVITY, SAMPLES};
pub use logging::init_logging;
