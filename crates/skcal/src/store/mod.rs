//! Year-agnostic table of facts per calendar day.
//!
//! The store is built once (from the bundled Slovak table, a file, or a list
//! of records) and is read-only afterwards. Rendering only needs the
//! [`FactLookup`] capability, so callers may substitute any other source.

mod error;

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{DateFacts, DayKey};

pub use error::{DataLoadError, DataSaveError};

/// The Slovak calendar shipped with the crate.
const BUNDLED_CALENDAR: &str = include_str!("../../data/calendar_sk.json");

/// Read access to the facts of a day.
pub trait FactLookup {
    /// The facts stored for `key`, or `None` if the day is unknown.
    fn lookup(&self, key: DayKey) -> Option<&DateFacts>;
}

impl<T: FactLookup + ?Sized> FactLookup for &T {
    fn lookup(&self, key: DayKey) -> Option<&DateFacts> {
        (**self).lookup(key)
    }
}

impl<T: FactLookup + ?Sized> FactLookup for Arc<T> {
    fn lookup(&self, key: DayKey) -> Option<&DateFacts> {
        (**self).lookup(key)
    }
}

/// In-memory calendar data keyed by [`DayKey`].
///
/// # Example
///
/// ```
/// use skcal::{DateFactStore, DayKey, FactLookup};
///
/// let store = DateFactStore::bundled().unwrap();
/// let facts = store.lookup(DayKey::new(6, 29).unwrap()).unwrap();
/// assert_eq!(facts.namedays(), Some("Peter, Pavol, Petra"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DateFactStore {
    facts: BTreeMap<DayKey, DateFacts>,
}

/// On-disk layout of a calendar data file.
#[derive(Deserialize)]
struct CalendarFile {
    dates: Vec<DateFacts>,
}

#[derive(Serialize)]
struct CalendarFileRef<'a> {
    dates: Vec<&'a DateFacts>,
}

impl DateFactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the Slovak calendar bundled with the crate.
    pub fn bundled() -> Result<Self, DataLoadError> {
        Self::parse_json(BUNDLED_CALENDAR, Path::new("<bundled>"))
    }

    /// Build a store from records, rejecting a day that appears twice.
    pub fn from_facts(facts: impl IntoIterator<Item = DateFacts>) -> Result<Self, DataLoadError> {
        Self::collect(facts, Path::new("<memory>"))
    }

    /// Load calendar data from a JSON string.
    ///
    /// # Example
    ///
    /// ```
    /// use skcal::DateFactStore;
    ///
    /// let store = DateFactStore::from_json_str(r#"{
    ///     "dates": [{ "date": "1225", "holidays": "Christmas" }]
    /// }"#).unwrap();
    /// assert_eq!(store.len(), 1);
    /// ```
    pub fn from_json_str(content: &str) -> Result<Self, DataLoadError> {
        Self::parse_json(content, Path::new("<string>"))
    }

    /// Load calendar data from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| DataLoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse_json(&content, path)
    }

    /// Encode the store in the calendar data file format.
    pub fn to_json_string(&self) -> Result<String, DataSaveError> {
        let file = CalendarFileRef {
            dates: self.facts.values().collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// Write the store to a JSON file, replacing any existing file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), DataSaveError> {
        let path = path.as_ref();
        let mut content = self.to_json_string()?;
        content.push('\n');
        fs::write(path, content).map_err(|e| DataSaveError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        debug!(path = %path.display(), days = self.len(), "saved calendar data");
        Ok(())
    }

    /// Number of days with stored facts.
    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }

    /// All records in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = &DateFacts> {
        self.facts.values()
    }

    fn parse_json(content: &str, path: &Path) -> Result<Self, DataLoadError> {
        let file: CalendarFile =
            serde_json::from_str(content).map_err(|e| DataLoadError::Parse {
                path: path.to_path_buf(),
                line: e.line(),
                column: e.column(),
                message: e.to_string(),
            })?;
        Self::collect(file.dates, path)
    }

    fn collect(
        facts: impl IntoIterator<Item = DateFacts>,
        path: &Path,
    ) -> Result<Self, DataLoadError> {
        let mut table = BTreeMap::new();
        for fact in facts {
            match table.entry(fact.day_key()) {
                Entry::Occupied(entry) => {
                    return Err(DataLoadError::DuplicateDay {
                        path: PathBuf::from(path),
                        key: *entry.key(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(fact);
                }
            }
        }
        debug!(source = %path.display(), days = table.len(), "loaded calendar data");
        Ok(Self { facts: table })
    }
}

impl FactLookup for DateFactStore {
    fn lookup(&self, key: DayKey) -> Option<&DateFacts> {
        self.facts.get(&key)
    }
}
