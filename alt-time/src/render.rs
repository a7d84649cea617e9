//! Markup rendering of TC calendar fields.
//!
//! Each selected unit becomes one `<span>` carrying its raw value plus data
//! attributes that client-side code uses to keep a clock ticking:
//!
//! ```text
//! <span data-designator="TC" data-class="now" data-unit="year">56</span>.
//! ...
//! <span data-tc_timestamp="1765000000" data-designator="TC" data-class="now" data-unit="designator">TC</span>
//! ```
//!
//! Units are separated by the delimiter at the same index (default
//! `. . , . . ␠`), so the default output reads like the compact text form.

use crate::tc::TcDate;
use std::fmt::{self, Write};

/// One renderable field of a [`TcDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TcUnit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Designator,
}

impl TcUnit {
    pub const ALL: [TcUnit; 7] = [
        TcUnit::Year,
        TcUnit::Month,
        TcUnit::Day,
        TcUnit::Hour,
        TcUnit::Minute,
        TcUnit::Second,
        TcUnit::Designator,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TcUnit::Year => "year",
            TcUnit::Month => "month",
            TcUnit::Day => "day",
            TcUnit::Hour => "hour",
            TcUnit::Minute => "minute",
            TcUnit::Second => "second",
            TcUnit::Designator => "designator",
        }
    }

    /// Raw field value as text.
    pub fn value(&self, date: &TcDate) -> String {
        match self {
            TcUnit::Year => date.year.to_string(),
            TcUnit::Month => date.month.to_string(),
            TcUnit::Day => date.day.to_string(),
            TcUnit::Hour => date.hour.to_string(),
            TcUnit::Minute => date.minute.to_string(),
            TcUnit::Second => date.second.to_string(),
            TcUnit::Designator => date.designator.clone(),
        }
    }
}

impl fmt::Display for TcUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which units to render and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    pub units: Vec<TcUnit>,
    /// Delimiter written after the unit at the same index; missing entries are empty.
    pub delimiters: Vec<String>,
    /// Pad width hint for client-side rendering (`data-pad`).
    pub pad: Option<u8>,
    /// Value of `data-class`, grouping spans that tick together.
    pub class: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            units: TcUnit::ALL.to_vec(),
            delimiters: [".", ".", ",", ".", ".", " "]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            pad: None,
            class: "now".to_string(),
        }
    }
}

/// Renders `date` as a sequence of `<span>` elements.
pub fn to_html(date: &TcDate, options: &HtmlOptions) -> String {
    let designator = escape_attr(&date.designator);
    let class = escape_attr(&options.class);
    let mut html = String::new();

    for (i, unit) in options.units.iter().enumerate() {
        let delimiter = options.delimiters.get(i).map(String::as_str).unwrap_or("");
        html.push_str("<span");
        if *unit == TcUnit::Designator {
            // Writing to a String cannot fail.
            let _ = write!(html, " data-tc_timestamp=\"{}\"", date.tc_timestamp);
        }
        let _ = write!(
            html,
            " data-designator=\"{}\" data-class=\"{}\" data-unit=\"{}\"",
            designator, class, unit
        );
        if let Some(pad) = options.pad {
            let _ = write!(html, " data-pad=\"{}\"", pad);
        }
        let _ = write!(
            html,
            ">{}</span>{}",
            escape_text(&unit.value(date)),
            escape_text(delimiter)
        );
    }
    html
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}
