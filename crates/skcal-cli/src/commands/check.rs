//! Implementation of the `skcal check` command.

use std::path::PathBuf;

use miette::miette;
use owo_colors::{OwoColorize, Stream};
use serde::Serialize;

use super::load_file;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Calendar data files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Fail unless every day of the year has an entry
    #[arg(long)]
    pub strict: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked file.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    days: usize,
    namedays: usize,
    holidays: usize,
    world_days: usize,
}

/// Days in a year including February 29.
const DAYS_IN_YEAR: usize = 366;

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let mut reports = Vec::with_capacity(args.files.len());

    for path in &args.files {
        let store = load_file(path)?;
        reports.push(CheckJson {
            file: path.display().to_string(),
            days: store.len(),
            namedays: store.iter().filter(|f| f.namedays().is_some()).count(),
            holidays: store.iter().filter(|f| f.holiday().is_some()).count(),
            world_days: store.iter().filter(|f| f.world_day().is_some()).count(),
        });
    }

    if args.json {
        let output = serde_json::to_string_pretty(&reports)
            .map_err(|e| miette!("Failed to encode report: {}", e))?;
        println!("{}", output);
    } else {
        for report in &reports {
            println!(
                "{} {}: {} days, {} with name-days, {} holidays, {} world days",
                "ok".if_supports_color(Stream::Stdout, |text| text.green()),
                report.file,
                report.days,
                report.namedays,
                report.holidays,
                report.world_days
            );
        }
    }

    let incomplete = reports.iter().any(|r| r.days < DAYS_IN_YEAR);
    if args.strict && incomplete {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}
