use core::fmt;
use core::str::FromStr;

use chrono::Datelike;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Days per month in a leap year, used to reject keys like `0231`.
const MAX_DAYS: [u32; 12] = [31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// A year-agnostic calendar day, written as zero-padded `MMDD`.
///
/// `DayKey` is the only join key between a date and the facts stored for it.
/// It serializes as its four-character string form.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use skcal::DayKey;
///
/// let key: DayKey = "1225".parse().unwrap();
/// let christmas = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
/// assert_eq!(DayKey::from_date(&christmas), key);
/// assert_eq!(key.to_string(), "1225");
/// ```
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DayKey {
    month: u32,
    day: u32,
}

/// An error produced when a string or a (month, day) pair is not a valid [`DayKey`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DayKeyError {
    /// The input is not exactly four ASCII digits.
    #[error("day key must be four digits in MMDD form, got '{input}'")]
    Format { input: String },

    /// The digits do not name a day that exists in some year.
    #[error("day key {month:02}{day:02} is not a calendar day")]
    OutOfRange { month: u32, day: u32 },
}

impl DayKey {
    /// Create a key from a month (1-12) and a day of that month.
    ///
    /// February 29 is accepted since the key ignores the year.
    pub fn new(month: u32, day: u32) -> Result<Self, DayKeyError> {
        let valid = (1..=12).contains(&month)
            && MAX_DAYS
                .get((month - 1) as usize)
                .is_some_and(|max| (1..=*max).contains(&day));
        if valid {
            Ok(Self { month, day })
        } else {
            Err(DayKeyError::OutOfRange { month, day })
        }
    }

    /// Derive the key of a date, ignoring its year.
    pub fn from_date(date: &impl Datelike) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.month, self.day)
    }
}

impl FromStr for DayKey {
    type Err = DayKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_error = || DayKeyError::Format {
            input: s.to_string(),
        };
        if s.len() != 4 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format_error());
        }
        let month = s[..2].parse().map_err(|_| format_error())?;
        let day = s[2..].parse().map_err(|_| format_error())?;
        Self::new(month, day)
    }
}

impl TryFrom<String> for DayKey {
    type Error = DayKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayKey> for String {
    fn from(key: DayKey) -> Self {
        key.to_string()
    }
}
