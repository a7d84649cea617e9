//! Input normalization: user text to a validated instant plus leap hint.
//!
//! | Input | Example | Interpretation |
//! |-------|---------|----------------|
//! | `now` | `now` | system clock (or the supplied reference) |
//! | Unix seconds | `-864000`, `1700000000` | UTC |
//! | Date-time with offset | `2025-03-05T07:08:09+01:00`, `…Z`, `…+0100` | as written |
//! | Naive date-time | `2025-03-05T07:08:09.5`, `2025-03-05 07:08` | UTC |
//! | Date | `2025-03-05` | UTC midnight |
//! | Extended year | `+12025-01-01`, `-0044-03-15T12:00:00Z` | proleptic Gregorian |
//!
//! A seconds field of `60` after `:59` is accepted for leap-second input. It is
//! rewritten to `:59:59` and the leap hint is set; the converter then decides
//! whether the hint matches a registered insertion.

use crate::instant::Instant;
use alt_time_core::{AltTimeError, AltTimeResult};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

const MAX_INPUT_LENGTH: usize = 64;

const OFFSET_FORMATS: [&str; 6] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// A normalized instant as the user wrote it, with its UTC offset kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedInput {
    pub datetime: DateTime<FixedOffset>,
    pub leap_second: bool,
}

impl ParsedInput {
    pub fn new(datetime: DateTime<FixedOffset>, leap_second: bool) -> Self {
        Self {
            datetime,
            leap_second,
        }
    }

    /// The Unix instant, carrying the leap hint.
    pub fn instant(&self) -> Instant {
        let instant = Instant::from_datetime(&self.datetime);
        instant.with_leap_second(instant.is_leap_second() || self.leap_second)
    }
}

/// Parses `input` relative to the system clock.
pub fn parse_input(input: &str) -> AltTimeResult<ParsedInput> {
    parse_input_at(input, Utc::now())
}

/// Parses `input`, resolving `now` to the given reference instant.
pub fn parse_input_at(input: &str, now: DateTime<Utc>) -> AltTimeResult<ParsedInput> {
    let trimmed = input.trim();

    if trimmed.len() > MAX_INPUT_LENGTH {
        let head: String = trimmed.chars().take(MAX_INPUT_LENGTH).collect();
        return Err(AltTimeError::parse_error(&head, "input too long"));
    }
    if trimmed.is_empty() {
        return Err(AltTimeError::parse_error(input, "empty input"));
    }
    if trimmed.eq_ignore_ascii_case("now") {
        return Ok(ParsedInput::new(now.fixed_offset(), false));
    }
    if let Ok(seconds) = trimmed.parse::<i64>() {
        let datetime = DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
            AltTimeError::parse_error(trimmed, "Unix timestamp outside the supported range")
        })?;
        return Ok(ParsedInput::new(datetime.fixed_offset(), false));
    }

    let (text, leap_second) = strip_leap_second(trimmed);
    let text = normalize_utc_designator(&text);

    parse_datetime(&text)
        .map(|datetime| ParsedInput::new(datetime, leap_second))
        .ok_or_else(|| {
            AltTimeError::parse_error(
                trimmed,
                "expected `now`, Unix seconds, or an ISO 8601 date or date-time",
            )
        })
}

fn parse_datetime(text: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime);
    }
    for format in OFFSET_FORMATS {
        if let Ok(datetime) = DateTime::parse_from_str(text, format) {
            return Some(datetime);
        }
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().fixed_offset())
}

/// Rewrites a `:59:60` seconds field to `:59:59`, reporting whether it did.
fn strip_leap_second(text: &str) -> (String, bool) {
    match text.find(":59:60") {
        Some(at) => {
            let mut rewritten = String::with_capacity(text.len());
            rewritten.push_str(&text[..at]);
            rewritten.push_str(":59:59");
            rewritten.push_str(&text[at + ":59:60".len()..]);
            (rewritten, true)
        }
        None => (text.to_string(), false),
    }
}

fn normalize_utc_designator(text: &str) -> String {
    match text.strip_suffix('Z').or_else(|| text.strip_suffix('z')) {
        Some(stem) => format!("{}+00:00", stem),
        None => text.to_string(),
    }
}
