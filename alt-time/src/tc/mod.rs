//! Terran Computational (TC) calendar engine.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`timestamp`] | [`TcTimestamp`]: seconds since the TC epoch |
//! | [`converter`] | Unix instant ⇄ TC timebase, leap-second aware |
//! | [`layout`] | TC timebase → year/month/day/time and back |
//! | [`date`] | [`TcDate`] calendar fields and their text forms |
//!
//! The data flow is instant → [`converter::instant_to_tc`] →
//! [`layout::decompose`] → [`TcDate`]; [`crate::render`] turns the fields into
//! markup.

pub mod converter;
pub mod date;
pub mod layout;
pub mod timestamp;

pub use converter::{instant_to_tc, tc_to_instant, ToInstant, ToTc};
pub use date::TcDate;
pub use layout::{compose, decompose, year_length, year_of, year_of_linear, year_start, LayoutOptions};
pub use timestamp::TcTimestamp;

use crate::instant::Instant;
use crate::registry::LeapSecondRegistry;
use alt_time_core::AltTimeResult;

/// Converts an instant straight to TC calendar fields with the standard
/// registry and default layout.
pub fn tc_date(instant: &Instant) -> AltTimeResult<TcDate> {
    let registry = LeapSecondRegistry::standard();
    let tc = instant_to_tc(instant, registry)?;
    decompose(tc, registry, LayoutOptions::default())
}
