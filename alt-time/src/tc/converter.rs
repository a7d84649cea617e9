//! Conversions between Unix instants and the TC timebase.
//!
//! The TC timebase counts seconds from the TC epoch (864000 s before the Unix
//! epoch) and, unlike Unix time, gives every historical leap second its own
//! slot. The mapping is a monotonic step function:
//!
//! ```text
//! tc = unix + 864000 + (insertions at or before unix)
//! ```
//!
//! # Leap Seconds
//!
//! For an insertion instant `L` preceded by `k` insertions, the three seconds
//! around it map to consecutive TC values:
//!
//! | Instant | TC |
//! |---------|----|
//! | `L - 1` (`23:59:59`) | `L - 1 + 864000 + k` |
//! | `L - 1` or `L` with the leap flag (`23:59:60`) | `L + 864000 + k` |
//! | `L` (`00:00:00`) | `L + 864000 + k + 1` |
//!
//! A leap flag on an instant that is neither `L - 1` nor `L` for any
//! registered `L` is advisory: it is ignored and a warning is logged.
//!
//! # Inverse
//!
//! [`tc_to_instant`] subtracts the epoch offset and then walks the registry in
//! ascending order, taking one second back for each insertion already passed.
//! Landing exactly on an insertion means the TC value is that leap second, and
//! the result is `L` with the flag set. The walk stops at the first insertion
//! beyond the candidate, so one forward pass suffices.
//!
//! # Usage
//!
//! ```
//! use alt_time::{Instant, TcTimestamp};
//! use alt_time::tc::converter::{ToInstant, ToTc};
//!
//! let tc = Instant::from_unix(0).to_tc().unwrap();
//! assert_eq!(tc, TcTimestamp::from_seconds(864_000));
//!
//! let back = tc.to_instant().unwrap();
//! assert_eq!(back, Instant::from_unix(0));
//! ```

use crate::constants::TC_EPOCH_OFFSET_SECONDS;
use crate::instant::Instant;
use crate::registry::LeapSecondRegistry;
use crate::tc::timestamp::TcTimestamp;
use alt_time_core::{AltTimeError, AltTimeResult, MathErrorKind};
use tracing::warn;

/// Convert to the TC timebase.
///
/// Implemented for: [`Instant`], [`TcTimestamp`] (identity)
pub trait ToTc {
    /// Convert using the standard leap-second registry.
    fn to_tc(&self) -> AltTimeResult<TcTimestamp> {
        self.to_tc_with(LeapSecondRegistry::standard())
    }

    /// Convert using an explicit registry.
    fn to_tc_with(&self, registry: &LeapSecondRegistry) -> AltTimeResult<TcTimestamp>;
}

/// Convert to a Unix instant.
///
/// Implemented for: [`TcTimestamp`], [`Instant`] (identity)
pub trait ToInstant {
    /// Convert using the standard leap-second registry.
    fn to_instant(&self) -> AltTimeResult<Instant> {
        self.to_instant_with(LeapSecondRegistry::standard())
    }

    /// Convert using an explicit registry.
    fn to_instant_with(&self, registry: &LeapSecondRegistry) -> AltTimeResult<Instant>;
}

impl ToTc for Instant {
    fn to_tc_with(&self, registry: &LeapSecondRegistry) -> AltTimeResult<TcTimestamp> {
        instant_to_tc(self, registry)
    }
}

impl ToTc for TcTimestamp {
    /// Identity conversion. Returns self unchanged.
    fn to_tc_with(&self, _registry: &LeapSecondRegistry) -> AltTimeResult<TcTimestamp> {
        Ok(*self)
    }
}

impl ToInstant for TcTimestamp {
    fn to_instant_with(&self, registry: &LeapSecondRegistry) -> AltTimeResult<Instant> {
        tc_to_instant(*self, registry)
    }
}

impl ToInstant for Instant {
    /// Identity conversion. Returns self unchanged.
    fn to_instant_with(&self, _registry: &LeapSecondRegistry) -> AltTimeResult<Instant> {
        Ok(*self)
    }
}

/// Convert a Unix instant to TC-timebase seconds.
///
/// Adds one second for every registered insertion at or before the instant.
/// A leap flag on `L - 1` or `L` selects the leap second itself; elsewhere
/// the flag is ignored with a warning.
pub fn instant_to_tc(instant: &Instant, registry: &LeapSecondRegistry) -> AltTimeResult<TcTimestamp> {
    let unix = instant.unix_seconds();

    let (aligned, leap_seconds) = if instant.is_leap_second() {
        match leap_second_insertion(unix, registry) {
            Some(insertion) => (insertion, registry.count_before(insertion)),
            None => {
                warn!(
                    unix,
                    "leap second flag does not align with a registered insertion; ignoring it"
                );
                (unix, registry.count_at_or_before(unix))
            }
        }
    } else {
        (unix, registry.count_at_or_before(unix))
    };

    let seconds = aligned
        .checked_add(TC_EPOCH_OFFSET_SECONDS)
        .and_then(|s| s.checked_add(leap_seconds))
        .ok_or_else(|| {
            AltTimeError::math_error(
                "instant to tc",
                MathErrorKind::Overflow,
                &format!("unix time {} is too large for the TC timebase", unix),
            )
        })?;

    Ok(TcTimestamp::new(seconds, instant.nanos()))
}

/// Convert TC-timebase seconds back to a Unix instant.
///
/// The returned instant carries the leap flag when the TC value is a leap
/// second; its Unix seconds are then the insertion instant `L`.
pub fn tc_to_instant(tc: TcTimestamp, registry: &LeapSecondRegistry) -> AltTimeResult<Instant> {
    let mut unix = tc
        .seconds()
        .checked_sub(TC_EPOCH_OFFSET_SECONDS)
        .ok_or_else(|| {
            AltTimeError::math_error(
                "tc to instant",
                MathErrorKind::Underflow,
                &format!("tc timestamp {} is too small for Unix time", tc.seconds()),
            )
        })?;

    for &insertion in registry.insertions() {
        if unix == insertion {
            return Ok(Instant::new(unix, tc.nanos()).with_leap_second(true));
        }
        if unix > insertion {
            unix -= 1;
        } else {
            break;
        }
    }

    Ok(Instant::new(unix, tc.nanos()))
}

/// Returns `true` if `instant` is a correctly flagged leap second: the flag is
/// set and the instant is `L - 1` or `L` for a registered insertion `L`.
pub fn is_registered_leap_second(instant: &Instant, registry: &LeapSecondRegistry) -> bool {
    instant.is_leap_second() && leap_second_insertion(instant.unix_seconds(), registry).is_some()
}

/// The insertion a flagged instant refers to: `unix + 1` when that is
/// registered, otherwise `unix` itself when registered.
fn leap_second_insertion(unix: i64, registry: &LeapSecondRegistry) -> Option<i64> {
    match unix.checked_add(1) {
        Some(next) if registry.is_insertion(next) => Some(next),
        _ if registry.is_insertion(unix) => Some(unix),
        _ => None,
    }
}
