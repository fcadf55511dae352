//! Implementation of the `skcal easter` command.

use chrono::{Datelike, Local};
use miette::{miette, IntoDiagnostic};
use serde::Serialize;
use skcal::easter::moving_holiday_dates;
use skcal::DayKey;

use crate::output::table::format_holiday_table;

/// Arguments for the easter command.
#[derive(Debug, clap::Args)]
pub struct EasterArgs {
    /// Year to compute. Defaults to the current year.
    pub year: Option<i32>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one moving holiday.
#[derive(Debug, Serialize)]
struct HolidayJson {
    date: String,
    key: String,
    name: &'static str,
}

/// Run the easter command.
pub fn run_easter(args: EasterArgs) -> miette::Result<i32> {
    let year = args.year.unwrap_or_else(|| Local::now().year());
    let holidays = moving_holiday_dates(year);
    if holidays.is_empty() {
        return Err(miette!("Year {} is outside the supported date range", year));
    }

    if args.json {
        let json_data: Vec<HolidayJson> = holidays
            .iter()
            .map(|h| HolidayJson {
                date: h.date.format("%Y-%m-%d").to_string(),
                key: DayKey::from_date(&h.date).to_string(),
                name: h.name,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&json_data).into_diagnostic()?);
    } else {
        println!("{}", format_holiday_table(&holidays));
    }

    Ok(exitcode::OK)
}
