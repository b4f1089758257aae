//! Command-line interface for freefall.
//!
//! This module provides the CLI structure for the `freefall` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, CurveCommand, OutputFormat, RenderCommand, SummaryCommand, TableCommand,
};

/// freefall - Free-fall measurements against h = ½gt²
///
/// Renders the recorded drop measurements and the theoretical curve as SVG
/// charts and an HTML report, and prints the residual table.
#[derive(Debug, Parser)]
#[command(name = "freefall")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write both charts and the HTML report
    Render(RenderCommand),

    /// Print measured vs. theoretical heights with residuals
    Table(TableCommand),

    /// Print the sampled theoretical curve
    Curve(CurveCommand),

    /// Print summary statistics
    Summary(SummaryCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn cli_with(verbose: u8, quiet: bool) -> Cli {
        Cli {
            config: None,
            verbose,
            quiet,
            command: Command::Summary(SummaryCommand { json: false }),
        }
    }

    #[test]
    fn test_cli_name() {
        assert_eq!(Cli::command().get_name(), "freefall");
    }

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbosity_levels() {
        use crate::logging::Verbosity;

        assert_eq!(cli_with(0, true).verbosity(), Verbosity::Quiet);
        assert_eq!(cli_with(0, false).verbosity(), Verbosity::Normal);
        assert_eq!(cli_with(1, false).verbosity(), Verbosity::Verbose);
        assert_eq!(cli_with(3, false).verbosity(), Verbosity::Trace);
    }

    #[test]
    fn test_parse_render() {
        let cli = Cli::try_parse_from(["freefall", "render", "-o", "plots"]).unwrap();
        match cli.command {
            Command::Render(cmd) => assert_eq!(cmd.out, Some(PathBuf::from("plots"))),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_table_defaults() {
        let cli = Cli::try_parse_from(["freefall", "table"]).unwrap();
        match cli.command {
            Command::Table(cmd) => {
                assert_eq!(cmd.format, OutputFormat::Table);
                assert!(!cmd.no_color);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_table_json() {
        let cli = Cli::try_parse_from(["freefall", "table", "--format", "json", "--no-color"])
            .unwrap();
        match cli.command {
            Command::Table(cmd) => {
                assert_eq!(cmd.format, OutputFormat::Json);
                assert!(cmd.no_color);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_curve() {
        let cli = Cli::try_parse_from(["freefall", "curve"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Curve(CurveCommand {
                format: OutputFormat::Plain
            })
        ));
    }

    #[test]
    fn test_parse_summary_json() {
        let cli = Cli::try_parse_from(["freefall", "summary", "-j"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Summary(SummaryCommand { json: true })
        ));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli =
            Cli::try_parse_from(["freefall", "config", "validate", "-f", "custom.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Validate { file: Some(_) })
        ));
    }

    #[test]
    fn test_parse_with_global_flags() {
        let cli =
            Cli::try_parse_from(["freefall", "-c", "/custom/config.toml", "-vv", "table"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_parse_with_quiet() {
        let cli = Cli::try_parse_from(["freefall", "-q", "render"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_missing_command_is_error() {
        assert!(Cli::try_parse_from(["freefall"]).is_err());
    }
}
