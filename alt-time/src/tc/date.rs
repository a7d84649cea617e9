use crate::constants::TC_PAD_WIDTH;
use crate::tc::timestamp::TcTimestamp;
use alt_time_core::utils::fraction_digits;
use std::fmt;

/// Calendar fields of a TC timestamp, as produced by [`super::layout::decompose`].
///
/// `month` runs 0–12 for the 28-day months and 13 for the short tail of the
/// year. `nanos` is the sub-second part; it renders as its significant digits.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TcDate {
    pub year: i64,
    pub month: u8,
    pub day: u8,
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanos: u32,
    pub designator: String,
    pub year_base: Option<i64>,
    pub offset: i64,
    pub tc_timestamp: TcTimestamp,
    pub unix_timestamp: i64,
    pub is_leap_second: bool,
}

impl TcDate {
    /// Fractional-second digits, `None` on a whole second.
    pub fn fraction(&self) -> Option<String> {
        fraction_digits(self.nanos)
    }

    /// Zero-padded rendering: `YY-MM-DD hh:mm:ss[.fraction] TC`.
    pub fn padded(&self) -> String {
        format!(
            "{:0w$}-{:0w$}-{:0w$} {:0w$}:{:0w$}:{:0w$}{} {}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.fraction_suffix(),
            self.designator,
            w = TC_PAD_WIDTH
        )
    }

    fn fraction_suffix(&self) -> String {
        self.fraction()
            .map(|digits| format!(".{}", digits))
            .unwrap_or_default()
    }
}

/// Compact rendering: `Y.M.D,h.m.s[.fraction] TC`.
impl fmt::Display for TcDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{},{}.{}.{}{} {}",
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.fraction_suffix(),
            self.designator
        )
    }
}

/// Designator tag for a year-base variant: `TC`, or `TC<base>`.
pub fn designator(year_base: Option<i64>) -> String {
    match year_base {
        Some(base) => format!("TC{}", base),
        None => "TC".to_string(),
    }
}
