//! One-call conversion of an input to labelled text in any standard.
//!
//! ```
//! use alt_time::formatter::{AltTimeFormatter, FormatOptions};
//! use alt_time::{Settings, Standard};
//!
//! let formatter = AltTimeFormatter::new(Settings::default())
//!     .with_options(FormatOptions { as_html: false, show_label: true });
//!
//! let text = formatter
//!     .format_str("2025-03-05T07:08:09Z", Some(Standard::Ordinal))
//!     .unwrap();
//! assert_eq!(text, "Ordinal date 2025.064.070809");
//! ```

use crate::catalog::{dale_reckoning, imperial_date, ordinal_date, stardate, Standard};
use crate::config::Settings;
use crate::offset::apply_year_offset;
use crate::parsing::{parse_input, ParsedInput};
use crate::registry::LeapSecondRegistry;
use crate::render::{to_html, HtmlOptions};
use crate::tc::{decompose, instant_to_tc, LayoutOptions, TcDate};
use alt_time_core::AltTimeResult;
use tracing::debug;

/// Output switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Render TC output as `<span>` markup instead of padded text.
    pub as_html: bool,
    /// Prefix the output with the standard's label.
    pub show_label: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            as_html: true,
            show_label: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AltTimeFormatter {
    settings: Settings,
    registry: &'static LeapSecondRegistry,
    layout: LayoutOptions,
    options: FormatOptions,
    html: HtmlOptions,
}

impl AltTimeFormatter {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            registry: LeapSecondRegistry::standard(),
            layout: LayoutOptions::default(),
            options: FormatOptions::default(),
            html: HtmlOptions::default(),
        }
    }

    pub fn with_registry(mut self, registry: &'static LeapSecondRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_html_options(mut self, html: HtmlOptions) -> Self {
        self.html = html;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Applies the configured year offset.
    ///
    /// A shifted `:59:60` no longer names a leap second, so the hint only
    /// survives an offset of zero.
    pub fn shifted(&self, input: &ParsedInput) -> AltTimeResult<ParsedInput> {
        let years = self.settings.year_offset;
        if years == 0 {
            return Ok(*input);
        }
        let datetime = apply_year_offset(&input.datetime, years)?;
        Ok(ParsedInput::new(datetime, false))
    }

    /// TC calendar fields for `input`, after the year offset.
    pub fn tc_date(&self, input: &ParsedInput) -> AltTimeResult<TcDate> {
        let instant = self.shifted(input)?.instant();
        let tc = instant_to_tc(&instant, self.registry)?;
        decompose(tc, self.registry, self.layout)
    }

    /// Converts `input` to `standard`, or to the settings default when `None`.
    pub fn format(&self, input: &ParsedInput, standard: Option<Standard>) -> AltTimeResult<String> {
        let standard = standard.unwrap_or(self.settings.default_standard);
        let shifted = self.shifted(input)?;
        let datetime = &shifted.datetime;

        let body = match standard {
            Standard::Tc => {
                let date = self.tc_date(input)?;
                if self.options.as_html {
                    to_html(&date, &self.html)
                } else {
                    date.padded()
                }
            }
            Standard::Stardate => format!("{:.2}", stardate(datetime)),
            Standard::Imperial => imperial_date(datetime).to_string(),
            Standard::Ordinal => ordinal_date(datetime),
            Standard::Dale => dale_reckoning(datetime)?.to_string(),
        };

        debug!(%standard, input = %input.datetime, output = %body, "formatted");

        if self.options.show_label {
            Ok(format!("{}{}", standard.label(), body))
        } else {
            Ok(body)
        }
    }

    /// Parses `input` with the system clock as reference, then formats it.
    pub fn format_str(&self, input: &str, standard: Option<Standard>) -> AltTimeResult<String> {
        self.format(&parse_input(input)?, standard)
    }
}

impl Default for AltTimeFormatter {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
