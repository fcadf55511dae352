//! Slovak calendar info: renders the long date, name-days, public holidays
//! and world days of a date through a small token template language.

pub mod calendar;
pub mod easter;
pub mod parser;
pub mod slovak;
pub mod store;
pub mod types;

pub use calendar::{Calendar, TokenValues};
pub use easter::{MovingHoliday, easter_sunday, easter_sunday_month_day, moving_holidays};
pub use store::{DataLoadError, DataSaveError, DateFactStore, FactLookup};
pub use types::{DateFacts, DayKey, DayKeyError, TokenKey};
