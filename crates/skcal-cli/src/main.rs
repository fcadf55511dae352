//! skcal CLI entry point.
//!
//! Provides command-line tools for the Slovak calendar:
//! - `skcal render` - Render a template for a date
//! - `skcal easter` - List the moving holidays of a year
//! - `skcal check` - Validate a calendar data file
//! - `skcal export` - Write calendar data to a file

mod commands;
mod output;

use std::io::stderr;
use std::process::exit;

use clap::{Parser, Subcommand, ValueEnum};
use commands::{
    run_check, run_easter, run_export, run_render, CheckArgs, EasterArgs, ExportArgs, RenderArgs,
};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Slovak calendar info tools.
#[derive(Debug, Parser)]
#[command(name = "skcal")]
#[command(about = "Slovak calendar info: name-days, holidays and world days", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Color output control
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, global = true)]
    pub color: ColorWhen,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a calendar info template
    Render(RenderArgs),
    /// List Easter and the holidays around it
    Easter(EasterArgs),
    /// Check a calendar data file
    Check(CheckArgs),
    /// Write calendar data to a file
    Export(ExportArgs),
}

/// Set up color output based on user preference.
fn setup_colors(color_when: ColorWhen) {
    match color_when {
        ColorWhen::Auto => {
            // owo-colors automatically checks TTY, NO_COLOR, FORCE_COLOR
        }
        ColorWhen::Always => {
            owo_colors::set_override(true);
        }
        ColorWhen::Never => {
            owo_colors::set_override(false);
        }
    }
}

/// Send log events to stderr, filtered by `RUST_LOG`.
fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(stderr)
        .with_target(false)
        .compact()
        .init();
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    setup_colors(cli.color);
    setup_logging(cli.verbose);

    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))?;

    let result = match cli.command {
        Commands::Render(args) => run_render(args),
        Commands::Easter(args) => run_easter(args),
        Commands::Check(args) => run_check(args),
        Commands::Export(args) => run_export(args),
    };

    match result {
        Ok(code) => exit(code),
        Err(e) => {
            eprintln!("{:?}", e);
            exit(exitcode::SOFTWARE);
        }
    }
}
