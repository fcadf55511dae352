mod date_facts;
mod day_key;
mod token_key;

pub use date_facts::DateFacts;
pub use day_key::{DayKey, DayKeyError};
pub use token_key::TokenKey;
