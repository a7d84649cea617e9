use alt_time_core::constants::NANOSECONDS_PER_SECOND;
use alt_time_core::utils::fraction_digits;
use alt_time_core::{AltTimeError, AltTimeResult, MathErrorKind};
use std::fmt;

/// Seconds since the TC epoch, leap seconds included, plus a sub-second part.
///
/// Ordering is chronological: whole seconds first, then nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TcTimestamp {
    seconds: i64,
    nanos: u32,
}

impl TcTimestamp {
    /// Nanoseconds of a full second or more are carried into the seconds.
    pub fn new(seconds: i64, nanos: u32) -> Self {
        let carry = (nanos / NANOSECONDS_PER_SECOND) as i64;
        Self {
            seconds: seconds.saturating_add(carry),
            nanos: nanos % NANOSECONDS_PER_SECOND,
        }
    }

    pub fn from_seconds(seconds: i64) -> Self {
        Self::new(seconds, 0)
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn nanos(&self) -> u32 {
        self.nanos
    }

    pub fn checked_add_seconds(&self, seconds: i64) -> AltTimeResult<Self> {
        let shifted = self.seconds.checked_add(seconds).ok_or_else(|| {
            AltTimeError::math_error(
                "tc timestamp shift",
                MathErrorKind::Overflow,
                &format!("{} + {} overflows", self.seconds, seconds),
            )
        })?;
        Ok(Self::new(shifted, self.nanos))
    }
}

impl fmt::Display for TcTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match fraction_digits(self.nanos) {
            Some(digits) => write!(f, "{}.{}", self.seconds, digits),
            None => write!(f, "{}", self.seconds),
        }
    }
}

impl From<i64> for TcTimestamp {
    fn from(seconds: i64) -> Self {
        Self::from_seconds(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_chronological() {
        let a = TcTimestamp::new(-1, 999_999_999);
        let b = TcTimestamp::new(0, 0);
        let c = TcTimestamp::new(0, 1);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_display() {
        assert_eq!(TcTimestamp::from(864_000).to_string(), "864000");
        assert_eq!(TcTimestamp::new(5, 250_000_000).to_string(), "5.25");
    }

    #[test]
    fn test_checked_add() {
        assert_eq!(
            TcTimestamp::from(10).checked_add_seconds(-20).unwrap(),
            TcTimestamp::from(-10)
        );
        assert!(TcTimestamp::from(i64::MAX).checked_add_seconds(1).is_err());
    }
}
