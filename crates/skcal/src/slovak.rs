//! Slovak locale strings.
//!
//! The calendar renders in a single fixed locale. Month names are in the
//! genitive case because they follow the day number in a long date.

use chrono::{Datelike, NaiveDate, Weekday};

pub const GOOD_FRIDAY: &str = "Veľký piatok";
pub const HOLY_SATURDAY: &str = "Biela sobota";
pub const EASTER_SUNDAY: &str = "Veľkonočná nedeľa";
pub const EASTER_MONDAY: &str = "Veľkonočný pondelok";

const MONTHS_GENITIVE: [&str; 12] = [
    "januára",
    "februára",
    "marca",
    "apríla",
    "mája",
    "júna",
    "júla",
    "augusta",
    "septembra",
    "októbra",
    "novembra",
    "decembra",
];

/// Lowercase weekday name, as used at the start of a long date.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "pondelok",
        Weekday::Tue => "utorok",
        Weekday::Wed => "streda",
        Weekday::Thu => "štvrtok",
        Weekday::Fri => "piatok",
        Weekday::Sat => "sobota",
        Weekday::Sun => "nedeľa",
    }
}

/// Month name in the genitive case (`1` is January).
pub fn month_name_genitive(month: u32) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    MONTHS_GENITIVE.get(index).copied()
}

/// Format a date in long form, e.g. `utorok 1. januára 2024`.
pub fn long_date(date: NaiveDate) -> String {
    // NaiveDate::month() is always 1..=12.
    let month = month_name_genitive(date.month()).unwrap_or_default();
    format!(
        "{} {}. {} {}",
        weekday_name(date.weekday()),
        date.day(),
        month,
        date.year()
    )
}
