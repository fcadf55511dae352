//! Implementation of the `skcal render` command.

use chrono::{Local, NaiveDate};
use miette::IntoDiagnostic;
use serde::Serialize;
use skcal::Calendar;

use super::DataArgs;

/// Template used when none is given.
const DEFAULT_TEMPLATE: &str =
    "Dnes je {longdate}{nameday:, meniny má [value]}.{holiday: [value].}{worldday: [value].}";

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Template with {longdate}, {nameday}, {holiday} and {worldday} tokens
    #[arg(long, short, env = "SKCAL_TEMPLATE", default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// Date to render (YYYY-MM-DD). Defaults to today.
    #[arg(long, short)]
    pub date: Option<NaiveDate>,

    #[command(flatten)]
    pub data: DataArgs,

    /// Output as JSON, including every token value
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
pub struct RenderResult {
    pub date: String,
    pub result: String,
    pub longdate: String,
    pub nameday: String,
    pub holiday: String,
    pub worldday: String,
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let calendar = Calendar::new(args.data.load()?);
    let date = args
        .date
        .unwrap_or_else(|| Local::now().date_naive());

    let result = calendar.render(date, &args.template);

    if args.json {
        let values = calendar.token_values(date);
        let output = RenderResult {
            date: date.to_string(),
            result,
            longdate: values.long_date,
            nameday: values.nameday,
            holiday: values.holiday,
            worldday: values.world_day,
        };
        println!("{}", serde_json::to_string_pretty(&output).into_diagnostic()?);
    } else {
        println!("{}", result);
    }

    Ok(exitcode::OK)
}
