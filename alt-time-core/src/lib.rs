//! Foundations shared by the alt-time calendar crates.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`errors`] | [`AltTimeError`] and [`AltTimeResult`] |
//! | [`constants`] | Second/day/nanosecond unit constants |
//! | [`utils`] | Ceiling division, English ordinals, fractional-second digits |
//!
//! ```
//! use alt_time_core::{AltTimeError, AltTimeResult, MathErrorKind};
//! use alt_time_core::constants::SECONDS_PER_DAY;
//!
//! fn days_to_seconds(days: i64) -> AltTimeResult<i64> {
//!     days.checked_mul(SECONDS_PER_DAY).ok_or_else(|| {
//!         AltTimeError::math_error("days_to_seconds", MathErrorKind::Overflow, "too many days")
//!     })
//! }
//!
//! assert_eq!(days_to_seconds(2).unwrap(), 172_800);
//! ```

pub mod constants;
pub mod errors;
pub mod utils;

pub use errors::{AltTimeError, AltTimeResult, MathErrorKind};
