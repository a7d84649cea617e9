//! Real-world instants on the Unix timeline.
//!
//! An [`Instant`] is a count of Unix seconds, a sub-second nanosecond part,
//! and a flag for the rare `23:59:60` wall-clock notation. Unix time has no
//! slot for a leap second, so the flag is what tells the leap second apart
//! from the neighbouring midnight.
//!
//! # Leap Second Notation
//!
//! For a registered insertion instant `L` (the midnight after a leap second):
//!
//! | Wall clock | Representation |
//! |------------|----------------|
//! | `23:59:59` | `Instant::from_unix(L - 1)` |
//! | `23:59:60` | `Instant::from_unix(L).with_leap_second(true)` (or `L - 1` with the flag) |
//! | `00:00:00` | `Instant::from_unix(L)` |
//!
//! # Usage
//!
//! ```
//! use alt_time::Instant;
//! use chrono::{DateTime, FixedOffset};
//!
//! let dt = DateTime::parse_from_rfc3339("2025-03-05T07:08:09+01:00").unwrap();
//! let instant = Instant::from_datetime(&dt);
//! assert_eq!(instant.unix_seconds(), 1_741_154_889);
//! assert!(!instant.is_leap_second());
//!
//! let leap = Instant::from_unix(1_483_228_800).with_leap_second(true);
//! assert_eq!(leap.to_rfc3339().unwrap(), "2016-12-31T23:59:60+00:00");
//! ```

use alt_time_core::constants::NANOSECONDS_PER_SECOND;
use alt_time_core::{AltTimeError, AltTimeResult, MathErrorKind};
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use std::fmt;

/// A point on the Unix timeline with an optional leap-second marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instant {
    unix_seconds: i64,
    nanos: u32,
    leap_second: bool,
}

impl Instant {
    /// Creates an instant from Unix seconds and a sub-second nanosecond part.
    ///
    /// Nanoseconds of a full second or more are carried into the seconds.
    pub fn new(unix_seconds: i64, nanos: u32) -> Self {
        let carry = (nanos / NANOSECONDS_PER_SECOND) as i64;
        Self {
            unix_seconds: unix_seconds.saturating_add(carry),
            nanos: nanos % NANOSECONDS_PER_SECOND,
            leap_second: false,
        }
    }

    pub fn from_unix(unix_seconds: i64) -> Self {
        Self::new(unix_seconds, 0)
    }

    /// Creates an instant from any chrono date-time.
    ///
    /// chrono encodes `:59:60` as a nanosecond count of one second or more;
    /// such values become the flagged leap second.
    pub fn from_datetime<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let nanos = datetime.timestamp_subsec_nanos();
        if nanos >= NANOSECONDS_PER_SECOND {
            Self::new(datetime.timestamp(), nanos - NANOSECONDS_PER_SECOND)
                .with_leap_second(true)
        } else {
            Self::new(datetime.timestamp(), nanos)
        }
    }

    /// Returns the current instant from the system clock.
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }

    /// Returns a copy carrying the given leap-second flag.
    pub fn with_leap_second(self, leap_second: bool) -> Self {
        Self {
            leap_second,
            ..self
        }
    }

    pub fn unix_seconds(&self) -> i64 {
        self.unix_seconds
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    pub fn is_leap_second(&self) -> bool {
        self.leap_second
    }

    /// Converts to a UTC chrono date-time, ignoring the leap-second flag.
    pub fn to_datetime(&self) -> AltTimeResult<DateTime<Utc>> {
        DateTime::from_timestamp(self.unix_seconds, self.nanos).ok_or_else(|| {
            AltTimeError::math_error(
                "instant to date-time",
                MathErrorKind::OutOfRange,
                &format!("{} is outside the supported calendar range", self.unix_seconds),
            )
        })
    }

    /// Formats as RFC 3339 in UTC.
    ///
    /// A flagged leap second renders as `23:59:60` of the day before its
    /// insertion instant.
    pub fn to_rfc3339(&self) -> AltTimeResult<String> {
        if !self.leap_second {
            return Ok(self
                .to_datetime()?
                .to_rfc3339_opts(SecondsFormat::AutoSi, false));
        }
        let before = Self::new(self.unix_seconds.saturating_sub(1), self.nanos);
        let text = before
            .to_datetime()?
            .to_rfc3339_opts(SecondsFormat::AutoSi, false);
        Ok(text.replacen(":59:59", ":59:60", 1))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.unix_seconds)?;
        if self.nanos != 0 {
            write!(f, ".{:09}", self.nanos)?;
        }
        if self.leap_second {
            write!(f, " (leap second)")?;
        }
        Ok(())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Instant {
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::from_datetime(&datetime)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let instant = Instant::new(10, 1_500_000_000);
        assert_eq!(instant.unix_seconds(), 11);
        assert_eq!(instant.nanos(), 500_000_000);
        assert!(!instant.is_leap_second());

        assert_eq!(Instant::from_unix(-5).unix_seconds(), -5);
        assert!(Instant::from_unix(0).with_leap_second(true).is_leap_second());
    }

    #[test]
    fn test_from_datetime_with_offset() {
        let dt = DateTime::parse_from_rfc3339("1970-01-01T01:00:00.25+01:00").unwrap();
        let instant = Instant::from(dt);
        assert_eq!(instant.unix_seconds(), 0);
        assert_eq!(instant.nanos(), 250_000_000);
    }

    #[test]
    fn test_from_chrono_leap_second() {
        let dt = DateTime::parse_from_rfc3339("2016-12-31T23:59:60Z").unwrap();
        let instant = Instant::from_datetime(&dt);
        assert!(instant.is_leap_second());
        assert_eq!(instant.unix_seconds(), 1_483_228_799);
        assert_eq!(instant.nanos(), 0);
    }

    #[test]
    fn test_rfc3339_formatting() {
        assert_eq!(
            Instant::from_unix(0).to_rfc3339().unwrap(),
            "1970-01-01T00:00:00+00:00"
        );
        assert_eq!(
            Instant::new(0, 500_000_000).to_rfc3339().unwrap(),
            "1970-01-01T00:00:00.500+00:00"
        );
        assert_eq!(
            Instant::from_unix(78_796_800)
                .with_leap_second(true)
                .to_rfc3339()
                .unwrap(),
            "1972-06-30T23:59:60+00:00"
        );
    }

    #[test]
    fn test_out_of_range_datetime() {
        assert!(Instant::from_unix(i64::MAX).to_datetime().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Instant::from_unix(42).to_string(), "42");
        assert_eq!(Instant::new(42, 5).to_string(), "42.000000005");
        assert_eq!(
            Instant::from_unix(42).with_leap_second(true).to_string(),
            "42 (leap second)"
        );
    }
}
