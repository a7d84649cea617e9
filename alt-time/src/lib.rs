//! Alternate calendars for real-world instants.
//!
//! The core is the Terran Computational (TC) calendar: a timebase that counts
//! every historical UTC leap second, laid out as years of thirteen 28-day
//! months with a short tail. Four formula calendars sit beside it.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`registry`] | Historical leap-second insertions and synthetic TC leap years |
//! | [`instant`] | [`Instant`]: Unix seconds, nanoseconds, leap-second flag |
//! | [`parsing`] | User text to [`parsing::ParsedInput`] |
//! | [`tc`] | TC timebase conversion, calendar layout, [`TcDate`] |
//! | [`render`] | `<span>` markup for TC fields |
//! | [`catalog`] | Stardate, Imperial, ordinal and Dale Reckoning dates |
//! | [`offset`] | Whole-year shifts before conversion |
//! | [`formatter`] | Labelled one-call conversion in any [`Standard`] |
//! | [`config`] | [`Settings`] loaded from TOML |
//!
//! # Quick Start
//!
//! ```
//! use alt_time::tc::{tc_date, ToInstant, ToTc};
//! use alt_time::Instant;
//!
//! let instant = Instant::from_unix(1_741_154_889);
//! let tc = instant.to_tc().unwrap();
//! assert_eq!(tc.to_instant().unwrap(), instant);
//!
//! let date = tc_date(&instant).unwrap();
//! assert_eq!(date.designator, "TC");
//! ```

pub mod catalog;
pub mod config;
pub mod constants;
pub mod formatter;
pub mod instant;
pub mod offset;
pub mod parsing;
pub mod registry;
pub mod render;
pub mod tc;

pub use catalog::Standard;
pub use config::Settings;
pub use formatter::{AltTimeFormatter, FormatOptions};
pub use instant::Instant;
pub use parsing::{parse_input, ParsedInput};
pub use registry::LeapSecondRegistry;
pub use tc::{TcDate, TcTimestamp};

pub use alt_time_core::{AltTimeError, AltTimeResult, MathErrorKind};
