//! Secondary calendars computed from a civil date-time.
//!
//! | Standard | Module | Example output |
//! |----------|--------|----------------|
//! | Stardate | [`stardate`] | `1002.74` |
//! | Imperial | [`imperial`] | `0 000.025.000.M3` |
//! | Ordinal | [`ordinal`] | `2025.064.070809` |
//! | Dale Reckoning | [`dale`] | `Hammer 1st, 1501 DR` |
//!
//! Each is a pure function of the calendar fields of a chrono date-time and
//! shares nothing with the TC engine. The Imperial date reads the hour in UTC;
//! the others use the fields in the offset the caller supplied.

pub mod dale;
pub mod imperial;
pub mod ordinal;
pub mod stardate;

pub use dale::{dale_reckoning, DaleDate};
pub use imperial::{imperial_date, ImperialDate};
pub use ordinal::ordinal_date;
pub use stardate::stardate;

use alt_time_core::constants::DAYS_PER_COMMON_YEAR;
use alt_time_core::AltTimeError;
use std::fmt;
use std::str::FromStr;

/// Output calendar selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Standard {
    #[default]
    Tc,
    Stardate,
    Imperial,
    Ordinal,
    Dale,
}

impl Standard {
    pub const ALL: [Standard; 5] = [
        Standard::Tc,
        Standard::Stardate,
        Standard::Imperial,
        Standard::Ordinal,
        Standard::Dale,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Standard::Tc => "tc",
            Standard::Stardate => "stardate",
            Standard::Imperial => "imperial",
            Standard::Ordinal => "ordinal",
            Standard::Dale => "dale",
        }
    }

    /// Prefix written before a converted value.
    pub fn label(&self) -> &'static str {
        match self {
            Standard::Tc => "TC: ",
            Standard::Stardate => "Stardate ",
            Standard::Imperial => "Imperial date ",
            Standard::Ordinal => "Ordinal date ",
            Standard::Dale => "Dale Reckoning ",
        }
    }

    /// Full name, as listed by `alt-time standards`.
    pub fn title(&self) -> &'static str {
        match self {
            Standard::Tc => "Terran Computational",
            Standard::Stardate => "Stardate",
            Standard::Imperial => "Imperial date",
            Standard::Ordinal => "Ordinal date",
            Standard::Dale => "Dale Reckoning",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Standard {
    type Err = AltTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tc" | "terran" => Ok(Standard::Tc),
            "stardate" => Ok(Standard::Stardate),
            "imperial" => Ok(Standard::Imperial),
            "ordinal" => Ok(Standard::Ordinal),
            "dale" | "dale_reckoning" | "dr" => Ok(Standard::Dale),
            _ => Err(AltTimeError::parse_error(
                s,
                "expected one of tc, stardate, imperial, ordinal, dale",
            )),
        }
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0) && (year % 100 != 0 || year % 400 == 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        DAYS_PER_COMMON_YEAR as u32 + 1
    } else {
        DAYS_PER_COMMON_YEAR as u32
    }
}
