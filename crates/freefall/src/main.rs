//! `freefall` - CLI for the free-fall experiment
//!
//! Prints the residual table, the theoretical curve and summary statistics,
//! and writes the SVG charts and HTML report.

#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use freefall::cli::{
    Cli, Command, ConfigCommand, CurveCommand, RenderCommand, SummaryCommand, TableCommand,
};
use freefall::experiment::{residuals, sample_curve, samples, CurveDomain, Summary, GRAVITY};
use freefall::render::{self, ReportInput};
use freefall::{init_logging, Config};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    init_logging(cli.verbosity());

    // Load configuration
    let config = Config::load_from(cli.config.clone()).context("loading configuration")?;
    debug!(?config, "configuration loaded");

    match cli.command {
        Command::Render(cmd) => handle_render(&config, &cmd),
        Command::Table(cmd) => handle_table(&config, &cmd),
        Command::Curve(cmd) => handle_curve(&cmd),
        Command::Summary(cmd) => handle_summary(&cmd),
        Command::Config(cmd) => handle_config(&config, cmd),
    }
}

fn handle_render(config: &Config, cmd: &RenderCommand) -> anyhow::Result<()> {
    let dir = cmd.out.clone().unwrap_or_else(|| config.output_dir());

    let curve = sample_curve(CurveDomain::EXPERIMENT);
    let rows = residuals(samples(), GRAVITY);
    let summary = Summary::new(samples(), &rows, GRAVITY);
    let input = ReportInput {
        samples: samples(),
        curve: &curve,
        residuals: &rows,
        summary: &summary,
    };

    let files = render::write_report(&dir, &config.chart, &input, chrono::Utc::now())
        .with_context(|| format!("writing report to {}", dir.display()))?;

    println!("{}", files.measured_svg.display());
    println!("{}", files.comparison_svg.display());
    println!("{}", files.html.display());
    Ok(())
}

fn handle_table(config: &Config, cmd: &TableCommand) -> anyhow::Result<()> {
    let rows = residuals(samples(), GRAVITY);
    let color = config.output.color && !cmd.no_color;
    print!(
        "{}",
        render::residual_table(&rows, cmd.format.into(), color)?
    );
    Ok(())
}

fn handle_curve(cmd: &CurveCommand) -> anyhow::Result<()> {
    let curve = sample_curve(CurveDomain::EXPERIMENT);
    print!("{}", render::curve_table(&curve, cmd.format.into())?);
    Ok(())
}

fn handle_summary(cmd: &SummaryCommand) -> anyhow::Result<()> {
    let rows = residuals(samples(), GRAVITY);
    let summary = Summary::new(samples(), &rows, GRAVITY);
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", render::summary_text(&summary));
    }
    Ok(())
}

fn handle_config(config: &Config, cmd: ConfigCommand) -> anyhow::Result<()> {
    match cmd {
        ConfigCommand::Show { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(config)?);
            } else {
                println!("Current Configuration");
                println!("=====================");
                println!();
                println!("[Chart]");
                println!("  Width:              {}", config.chart.width);
                println!("  Height:             {}", config.chart.height);
                println!("  Time axis max (s):  {}", config.chart.x_max);
                println!();
                println!("[Output]");
                println!("  Directory:          {}", config.output_dir().display());
                println!("  Color:              {}", config.output.color);
            }
        }
        ConfigCommand::Path => {
            println!("{}", Config::default_config_path().display());
        }
        ConfigCommand::Validate { file } => {
            let path = file.unwrap_or_else(Config::default_config_path);
            println!("Validating configuration: {}", path.display());
            Config::validate_file(&path)
                .with_context(|| format!("validating {}", path.display()))?;
            println!("Configuration is valid.");
        }
    }
    Ok(())
}
