use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::types::DayKey;

/// The facts known about one calendar day.
///
/// Every field except the key is optional and independent of the others. The
/// serialized field names follow the calendar data file (`date`, `namedays`,
/// `holidays`, `worldDay`).
///
/// # Example
///
/// ```
/// use skcal::{DateFacts, DayKey};
///
/// let facts = DateFacts::builder()
///     .day_key(DayKey::new(12, 25).unwrap())
///     .holiday("Christmas")
///     .build();
/// assert_eq!(facts.holiday(), Some("Christmas"));
/// assert_eq!(facts.namedays(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
pub struct DateFacts {
    #[serde(rename = "date")]
    day_key: DayKey,

    #[builder(into)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    namedays: Option<String>,

    #[builder(into)]
    #[serde(rename = "holidays", default, skip_serializing_if = "Option::is_none")]
    holiday: Option<String>,

    #[builder(into)]
    #[serde(rename = "worldDay", default, skip_serializing_if = "Option::is_none")]
    world_day: Option<String>,
}

impl DateFacts {
    pub fn day_key(&self) -> DayKey {
        self.day_key
    }

    /// Names celebrating on this day, if any.
    pub fn namedays(&self) -> Option<&str> {
        non_empty(self.namedays.as_deref())
    }

    /// The fixed-date public holiday on this day, if any.
    pub fn holiday(&self) -> Option<&str> {
        non_empty(self.holiday.as_deref())
    }

    /// The informal world day or memorial day, if any.
    pub fn world_day(&self) -> Option<&str> {
        non_empty(self.world_day.as_deref())
    }
}

/// Data files may carry `""` for a missing fact; treat it the same as absent.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
