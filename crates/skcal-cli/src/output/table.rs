//! Table formatting utilities for CLI output.

use chrono::Datelike;
use comfy_table::{presets, ContentArrangement, Table};
use owo_colors::{OwoColorize, Stream};
use skcal::slovak::weekday_name;
use skcal::{DayKey, MovingHoliday};

/// Format moving holidays as a table of date, day key, weekday and name.
pub fn format_holiday_table(holidays: &[MovingHoliday]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Date", "Key", "Weekday", "Holiday"]);

    for holiday in holidays {
        table.add_row(vec![
            holiday.date.format("%Y-%m-%d").to_string(),
            DayKey::from_date(&holiday.date).to_string(),
            weekday_name(holiday.date.weekday()).to_string(),
            holiday
                .name
                .if_supports_color(Stream::Stdout, |text| text.bold())
                .to_string(),
        ]);
    }

    table
}
