//! Easter Sunday and the moving holidays around it.
//!
//! Easter is computed with a Gauss-type congruence using the constants for the
//! Gregorian years 1900 through 2099. Years outside that range are accepted
//! and computed the same way, but the result is not guaranteed to be the real
//! Easter date or even a Sunday.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use tracing::trace;

use crate::slovak;
use crate::types::DayKey;

/// A holiday whose date follows Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingHoliday {
    pub date: NaiveDate,
    pub name: &'static str,
}

/// Offsets from Easter Sunday, in days, and the holiday observed on each.
const MOVING_HOLIDAYS: [(i64, &str); 4] = [
    (-2, slovak::GOOD_FRIDAY),
    (-1, slovak::HOLY_SATURDAY),
    (0, slovak::EASTER_SUNDAY),
    (1, slovak::EASTER_MONDAY),
];

/// Month and day of Easter Sunday in `year`.
///
/// ```
/// assert_eq!(skcal::easter::easter_sunday_month_day(2024), (3, 31));
/// assert_eq!(skcal::easter::easter_sunday_month_day(2025), (4, 20));
/// ```
pub fn easter_sunday_month_day(year: i32) -> (u32, u32) {
    let d = (19 * year.rem_euclid(19) + 24).rem_euclid(30);
    let e = (5 + 2 * year.rem_euclid(4) + 4 * year.rem_euclid(7) + 6 * d).rem_euclid(7);

    let march_day = 22 + d + e;
    let mut april_day = d + e - 9;

    // April 26 is never Easter; the congruence lands there only when it
    // should have produced April 19.
    if april_day > 25 {
        april_day -= 7;
    }

    if march_day > 30 {
        // "April 0" falls back to March 31.
        if april_day < 1 {
            (3, (31 + april_day).unsigned_abs())
        } else {
            (4, april_day.unsigned_abs())
        }
    } else {
        (3, march_day.unsigned_abs())
    }
}

/// Easter Sunday of `year` as a date.
///
/// Returns `None` only when `year` lies outside the range `chrono` can represent.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let (month, day) = easter_sunday_month_day(year);
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Good Friday through Easter Monday of `year`, in date order.
///
/// Dates are derived with calendar arithmetic, so they are correct across
/// month boundaries (e.g. Good Friday on March 29 for Easter on March 31).
pub fn moving_holiday_dates(year: i32) -> Vec<MovingHoliday> {
    let Some(sunday) = easter_sunday(year) else {
        trace!(year, "year outside representable range, no moving holidays");
        return Vec::new();
    };

    MOVING_HOLIDAYS
        .iter()
        .filter_map(|&(offset, name)| {
            sunday
                .checked_add_signed(Duration::days(offset))
                .map(|date| MovingHoliday { date, name })
        })
        .collect()
}

/// Moving holiday names of `year` keyed by their day.
pub fn moving_holidays(year: i32) -> BTreeMap<DayKey, &'static str> {
    let holidays: BTreeMap<DayKey, &'static str> = moving_holiday_dates(year)
        .into_iter()
        .map(|holiday| (DayKey::from_date(&holiday.date), holiday.name))
        .collect();
    trace!(year, count = holidays.len(), "computed moving holidays");
    holidays
}
