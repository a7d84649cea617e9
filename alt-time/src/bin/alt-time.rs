//! alt-time - convert instants to the TC calendar and other alternate calendars.

use std::path::{Path, PathBuf};

use alt_time::config::DEFAULT_SETTINGS_FILE;
use alt_time::tc::{decompose, instant_to_tc, tc_to_instant, LayoutOptions};
use alt_time::{
    parse_input, AltTimeFormatter, FormatOptions, Instant, LeapSecondRegistry, Settings,
    Standard, TcTimestamp,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "alt-time")]
#[command(version, about = "Convert instants to the TC calendar and other alternate calendars")]
struct Cli {
    /// Path to a settings file (defaults to ./alt-time.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a date, date-time or Unix timestamp
    Convert {
        /// `now`, Unix seconds, or an ISO 8601 date or date-time
        #[arg(default_value = "now", allow_hyphen_values = true)]
        input: String,

        /// tc, stardate, imperial, ordinal or dale (defaults to the settings)
        #[arg(short, long)]
        standard: Option<Standard>,

        /// Treat the input as the leap second before the next insertion
        #[arg(long)]
        leap_second: bool,

        /// Render TC output as span markup
        #[arg(long)]
        html: bool,

        /// Omit the standard's label
        #[arg(long)]
        no_label: bool,

        /// Shift the input by whole years (overrides the settings)
        #[arg(long, allow_negative_numbers = true)]
        year_offset: Option<i32>,
    },

    /// Map TC timebase seconds back to a Unix instant
    ToInstant {
        #[arg(allow_negative_numbers = true)]
        tc_seconds: i64,
    },

    /// Expand TC timebase seconds into calendar fields
    Decompose {
        #[arg(allow_negative_numbers = true)]
        tc_seconds: i64,

        /// Apply synthetic leap seconds only up to this TC year
        #[arg(long, allow_negative_numbers = true)]
        year_base: Option<i64>,

        /// Seconds added before the year search
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i64,

        /// Print the field record as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the leap-second registry
    LeapSeconds,

    /// List the supported standards
    Standards,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let settings = load_settings(cli.config.as_deref())?;
    let registry = LeapSecondRegistry::standard();

    match cli.command {
        Commands::Convert {
            input,
            standard,
            leap_second,
            html,
            no_label,
            year_offset,
        } => {
            let mut parsed = parse_input(&input)?;
            parsed.leap_second |= leap_second;

            let settings = Settings {
                year_offset: year_offset.unwrap_or(settings.year_offset),
                ..settings
            };
            let formatter = AltTimeFormatter::new(settings).with_options(FormatOptions {
                as_html: html,
                show_label: !no_label,
            });

            println!("{}", formatter.format(&parsed, standard)?);
        }
        Commands::ToInstant { tc_seconds } => {
            let instant = tc_to_instant(TcTimestamp::from_seconds(tc_seconds), registry)?;
            println!("unix: {}", instant.unix_seconds());
            println!("leap_second: {}", instant.is_leap_second());
            match instant.to_rfc3339() {
                Ok(text) => println!("utc: {}", text),
                Err(e) => warn!(error = %e, "instant has no calendar representation"),
            }
        }
        Commands::Decompose {
            tc_seconds,
            year_base,
            offset,
            json,
        } => {
            let options = LayoutOptions {
                year_base,
                offset,
            };
            let date = decompose(TcTimestamp::from_seconds(tc_seconds), registry, options)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&date).context("serializing calendar fields")?
                );
            } else {
                println!("{}", date);
                println!("{}", date.padded());
                if date.is_leap_second {
                    println!("(leap second)");
                }
            }
        }
        Commands::LeapSeconds => print_registry(registry)?,
        Commands::Standards => {
            for standard in Standard::ALL {
                let marker = if standard == settings.default_standard {
                    " (default)"
                } else {
                    ""
                };
                println!("{:<10} {}{}", standard.as_str(), standard.title(), marker);
            }
        }
    }

    Ok(())
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let default = PathBuf::from(DEFAULT_SETTINGS_FILE);
            if !default.exists() {
                return Ok(Settings::default());
            }
            default
        }
    };

    match Settings::from_file(&path) {
        Ok(settings) => {
            debug!(path = %path.display(), ?settings, "loaded settings");
            Ok(settings)
        }
        Err(e) if e.is_recoverable() => {
            warn!(error = %e, "using default settings");
            Ok(Settings::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_registry(registry: &LeapSecondRegistry) -> Result<()> {
    println!("Historical leap seconds ({}):", registry.insertions().len());
    for &insertion in registry.insertions() {
        let leap = Instant::from_unix(insertion).with_leap_second(true);
        let tc = instant_to_tc(&leap, registry)?;
        println!("  {}  unix {}  tc {}", leap.to_rfc3339()?, insertion, tc);
    }

    let years: Vec<String> = registry.tc_years().iter().map(|y| y.to_string()).collect();
    println!(
        "Synthetic TC leap-second years ({}): {}",
        years.len(),
        years.join(", ")
    );
    Ok(())
}
