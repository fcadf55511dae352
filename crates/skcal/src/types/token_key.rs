use core::fmt;

/// The token names recognized inside template markers.
///
/// Names are case-sensitive: `{nameday}` is recognized, `{Nameday}` is not.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq)]
pub enum TokenKey {
    /// `{longdate}`: the date in long form.
    LongDate,
    /// `{nameday}`: names celebrating on the day.
    Nameday,
    /// `{holiday}`: moving and fixed public holidays.
    Holiday,
    /// `{worldday}`: informal world days and memorial days.
    WorldDay,
}

impl TokenKey {
    pub const ALL: [TokenKey; 4] = [
        TokenKey::LongDate,
        TokenKey::Nameday,
        TokenKey::Holiday,
        TokenKey::WorldDay,
    ];

    /// Look up a key by the name used in templates.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "longdate" => Some(TokenKey::LongDate),
            "nameday" => Some(TokenKey::Nameday),
            "holiday" => Some(TokenKey::Holiday),
            "worldday" => Some(TokenKey::WorldDay),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKey::LongDate => "longdate",
            TokenKey::Nameday => "nameday",
            TokenKey::Holiday => "holiday",
            TokenKey::WorldDay => "worldday",
        }
    }
}

impl fmt::Display for TokenKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
