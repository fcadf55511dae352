//! Rendering calendar info for a date through a template.

use bon::Builder;
use chrono::{Datelike, Local, NaiveDate};
use tracing::trace;

use crate::easter::moving_holidays;
use crate::parser::{Template, parse_template};
use crate::slovak;
use crate::store::FactLookup;
use crate::types::{DateFacts, DayKey, TokenKey};

/// Renders calendar info strings from templates.
///
/// A template is free text with token markers:
///
/// - `{longdate}` renders the date in long form
/// - `{nameday}` renders the names celebrating on the day
/// - `{holiday}` renders public holidays, moving (Easter) holidays first
/// - `{worldday}` renders world days, memorial days and other observances
///
/// A marker may carry a sub-format after a colon, in which `[value]` stands for
/// the token value: `{nameday:Meniny má [value].}`. Markers whose key is
/// unknown or whose value is blank are removed from the output.
///
/// The calendar holds no mutable state; it can be shared between threads when
/// its store can.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use skcal::{Calendar, DateFactStore};
///
/// let calendar = Calendar::new(DateFactStore::bundled().unwrap());
/// let date = NaiveDate::from_ymd_opt(2024, 12, 24).unwrap();
/// assert_eq!(
///     calendar.render(date, "Dnes je {longdate}{nameday:, meniny má [value]}."),
///     "Dnes je utorok 24. decembra 2024, meniny má Adam, Eva.",
/// );
/// ```
#[derive(Debug, Clone, Builder)]
#[builder(on(String, into))]
pub struct Calendar<S: FactLookup> {
    /// Source of name-days, fixed holidays and world days.
    store: S,

    /// Text placed between a moving holiday and a fixed holiday on the same day.
    #[builder(default = ", ".to_string())]
    holiday_separator: String,
}

/// Values of every recognized token for one date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenValues {
    pub long_date: String,
    pub nameday: String,
    pub holiday: String,
    pub world_day: String,
}

impl TokenValues {
    /// The value for `key`; empty when the date has no such fact.
    pub fn get(&self, key: TokenKey) -> &str {
        match key {
            TokenKey::LongDate => &self.long_date,
            TokenKey::Nameday => &self.nameday,
            TokenKey::Holiday => &self.holiday,
            TokenKey::WorldDay => &self.world_day,
        }
    }
}

impl<S: FactLookup> Calendar<S> {
    /// Create a calendar over `store` with default settings.
    pub fn new(store: S) -> Self {
        Calendar::builder().store(store).build()
    }

    /// The underlying fact store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Resolve every token for `date`.
    pub fn token_values(&self, date: NaiveDate) -> TokenValues {
        let key = DayKey::from_date(&date);
        let facts = self.store.lookup(key);

        TokenValues {
            long_date: slovak::long_date(date),
            nameday: facts
                .and_then(DateFacts::namedays)
                .unwrap_or_default()
                .to_string(),
            holiday: self.holiday(date, key, facts),
            world_day: facts
                .and_then(DateFacts::world_day)
                .unwrap_or_default()
                .to_string(),
        }
    }

    /// Render `template` for `date`.
    pub fn render(&self, date: NaiveDate, template: &str) -> String {
        self.render_template(date, &parse_template(template))
    }

    /// Render `template` for the current local date.
    pub fn render_for_today(&self, template: &str) -> String {
        self.render(Local::now().date_naive(), template)
    }

    /// Render an already parsed template for `date`.
    ///
    /// Markers are processed in order of appearance. Each one replaces every
    /// occurrence of its exact text in the template text not yet substituted,
    /// so identical markers share one replacement. Substituted values are
    /// never searched for further markers.
    pub fn render_template(&self, date: NaiveDate, template: &Template) -> String {
        let values = self.token_values(date);
        let mut pieces = vec![Piece::Pending(template.to_source())];

        for token in template.tokens() {
            let replacement = match token.token_key() {
                Some(key) => token.expand(values.get(key)),
                None => {
                    trace!(token = %token.source, "eliding unrecognized token");
                    String::new()
                }
            };
            pieces = substitute(pieces, &token.source, &replacement);
        }

        pieces.iter().map(Piece::as_str).collect()
    }

    /// Moving holiday for the year first, then the fixed holiday for the day.
    fn holiday(&self, date: NaiveDate, key: DayKey, facts: Option<&DateFacts>) -> String {
        let moving = moving_holidays(date.year());
        let moving_name: Option<&str> = moving.get(&key).copied();
        let parts: Vec<&str> = moving_name
            .into_iter()
            .chain(facts.and_then(DateFacts::holiday))
            .collect();
        parts.join(self.holiday_separator.as_str())
    }
}

/// Output text, split into template text and already substituted values.
enum Piece {
    Pending(String),
    Done(String),
}

impl Piece {
    fn as_str(&self) -> &str {
        match self {
            Piece::Pending(text) | Piece::Done(text) => text,
        }
    }
}

/// Replace `marker` with `replacement` in every pending piece.
fn substitute(pieces: Vec<Piece>, marker: &str, replacement: &str) -> Vec<Piece> {
    let mut result = Vec::with_capacity(pieces.len());
    for piece in pieces {
        match piece {
            Piece::Pending(text) => {
                let mut parts = text.split(marker);
                if let Some(first) = parts.next() {
                    result.push(Piece::Pending(first.to_string()));
                }
                for part in parts {
                    result.push(Piece::Done(replacement.to_string()));
                    result.push(Piece::Pending(part.to_string()));
                }
            }
            done @ Piece::Done(_) => result.push(done),
        }
    }
    result
}
