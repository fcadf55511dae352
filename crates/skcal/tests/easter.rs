//! Tests for the Easter computation and moving holidays.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use skcal::{DayKey, easter_sunday, easter_sunday_month_day, moving_holidays};
use skcal::easter::moving_holiday_dates;
use skcal::slovak;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn key(month: u32, day: u32) -> DayKey {
    DayKey::new(month, day).unwrap()
}

// =========================================================================
// Easter Sunday
// =========================================================================

#[test]
fn known_easter_dates() {
    assert_eq!(easter_sunday_month_day(2024), (3, 31));
    assert_eq!(easter_sunday_month_day(2025), (4, 20));
    assert_eq!(easter_sunday_month_day(2000), (4, 23));
}

#[test]
fn matches_published_dates() {
    let published = [
        (1961, 4, 2),
        (1998, 4, 12),
        (2008, 3, 23),
        (2011, 4, 24),
        (2016, 3, 27),
        (2019, 4, 21),
        (2023, 4, 9),
        (2026, 4, 5),
        (2030, 4, 21),
        (2038, 4, 25),
    ];
    for (year, month, day) in published {
        assert_eq!(easter_sunday(year), Some(date(year, month, day)), "{year}");
    }
}

#[test]
fn easter_is_a_sunday_between_march_22_and_april_25() {
    for year in 1900..=2099 {
        let sunday = easter_sunday(year).unwrap();
        assert_eq!(sunday.weekday(), Weekday::Sun, "{year}");
        assert!(sunday >= date(year, 3, 22), "{year}: {sunday}");
        assert!(sunday <= date(year, 4, 25), "{year}: {sunday}");
    }
}

#[test]
fn out_of_range_years_still_produce_a_date() {
    // Not validated; the result is best effort.
    let (month, day) = easter_sunday_month_day(1200);
    assert!(month == 3 || month == 4);
    assert!((1..=31).contains(&day));
    assert!(easter_sunday(-44).is_some());
}

// =========================================================================
// Moving holidays
// =========================================================================

#[test]
fn moving_holidays_have_four_entries() {
    for year in 1900..=2099 {
        assert_eq!(moving_holidays(year).len(), 4, "{year}");
    }
}

#[test]
fn moving_holiday_dates_are_consecutive_around_easter() {
    for year in [1954, 2000, 2013, 2024, 2025, 2076] {
        let sunday = easter_sunday(year).unwrap();
        let dates: Vec<NaiveDate> = moving_holiday_dates(year)
            .into_iter()
            .map(|h| h.date)
            .collect();
        assert_eq!(dates.len(), 4);
        assert_eq!(dates[2], sunday);
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1), "{year}");
        }
    }
}

#[test]
fn moving_holidays_for_2025() {
    let holidays = moving_holidays(2025);
    assert_eq!(holidays.get(&key(4, 18)), Some(&slovak::GOOD_FRIDAY));
    assert_eq!(holidays.get(&key(4, 19)), Some(&slovak::HOLY_SATURDAY));
    assert_eq!(holidays.get(&key(4, 20)), Some(&slovak::EASTER_SUNDAY));
    assert_eq!(holidays.get(&key(4, 21)), Some(&slovak::EASTER_MONDAY));
}

#[test]
fn moving_holidays_cross_month_boundary() {
    // Easter 2024 is March 31, so Easter Monday is April 1.
    let holidays = moving_holidays(2024);
    assert_eq!(holidays.get(&key(3, 29)), Some(&slovak::GOOD_FRIDAY));
    assert_eq!(holidays.get(&key(3, 30)), Some(&slovak::HOLY_SATURDAY));
    assert_eq!(holidays.get(&key(3, 31)), Some(&slovak::EASTER_SUNDAY));
    assert_eq!(holidays.get(&key(4, 1)), Some(&slovak::EASTER_MONDAY));
}

#[test]
fn moving_holiday_names_are_slovak() {
    let names: Vec<&str> = moving_holiday_dates(2025)
        .into_iter()
        .map(|h| h.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "Veľký piatok",
            "Biela sobota",
            "Veľkonočná nedeľa",
            "Veľkonočný pondelok"
        ]
    );
}
