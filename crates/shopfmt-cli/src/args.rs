//! Command-line interface definitions using clap
//!
//! Argument structures here are CLI-framework wrappers: clap derives live
//! on this side, and each command converts explicitly into the core
//! library's option types before any formatting happens. Record-shaped
//! inputs (cards, names, promo codes, locations) arrive as JSON and are
//! deserialized into the core structs.

use anyhow::{anyhow, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use shopfmt_core::{FormatName, RangeFormat, RangeOptions};

/// Retail display formatters for the command line
///
/// Formats dates, money, phone numbers, zip codes and other retail domain
/// values the way the storefront renders them, for use in shell scripts
/// and templating pipelines.
#[derive(Parser)]
#[command(version, about, name = "shopfmt")]
pub struct Cli {
    /// IANA timezone used by the date commands
    #[arg(long, global = true, default_value = "UTC")]
    pub timezone: String,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the shopfmt CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Render an instant with a named format or a raw strftime template
    Date {
        /// RFC 3339 instant, e.g. 2014-03-08T17:00:00Z
        instant: String,
        /// Format name (e.g. shortTime, mailChimpDate) or raw template
        format: String,
    },
    /// Render a YYYY-M-D day string with a named format
    Day {
        day: String,
        /// Format name, e.g. shortShoppingDay
        format: String,
    },
    /// Render a time range between two instants
    TimeRange(RangeArgs),
    /// Render a date range between two instants
    DateRange(RangeArgs),
    /// Render a delivery window as clock times
    DeliveryWindow { start: String, end: String },
    /// Format a dollar amount
    Money {
        value: f64,
        /// Decimal places (default 2)
        #[arg(long)]
        precision: Option<u8>,
        /// Precision override for cent-free amounts, e.g. 0 renders $40
        #[arg(long)]
        whole_number_precision: Option<u8>,
    },
    /// Round to two decimals and append %
    Percentage { value: f64 },
    /// Normalize a phone number to +1NNNNNNNNNN form
    NormalizePhone { phone: String },
    /// Format a US phone number as NNN-NNN-NNNN
    Phone { phone: String },
    /// Extract the five-digit prefix of a zip code
    Zip { zip: String },
    /// Format a payment card from a JSON record
    Card {
        /// e.g. {"type":"visa","last4":"4242","exp_month":"6","exp_year":"2020"}
        json: String,
    },
    /// Format a customer name from a JSON record
    CustomerName {
        /// e.g. {"firstName":"John","lastName":"Smith"}
        json: String,
    },
    /// Format a promo code value from a JSON record
    Promo {
        /// e.g. {"type":"dollar","value":5}
        json: String,
    },
    /// Format a location from a JSON record
    Location {
        /// e.g. {"address":"530 Hampshire St","city":"San Francisco","state":"CA","zip":"94110"}
        json: String,
        /// Layout name
        #[arg(long, default_value = "full")]
        format: String,
    },
}

/// Shared arguments for the range commands.
#[derive(ClapArgs)]
pub struct RangeArgs {
    /// RFC 3339 start instant
    pub start: String,
    /// RFC 3339 end instant
    pub end: String,
    /// Range format: a registered name, "prose", or "pickupChooser"
    #[arg(long)]
    pub format: Option<String>,
    /// Separator between the rendered endpoints
    #[arg(long)]
    pub separator: Option<String>,
}

impl RangeArgs {
    /// Convert the CLI arguments into core range options.
    pub fn to_options(&self) -> Result<RangeOptions> {
        let mut options = RangeOptions::default();
        if let Some(format) = self.format.as_deref() {
            options.format = match format {
                "prose" => RangeFormat::Prose,
                "pickupChooser" => RangeFormat::PickupChooser,
                name => name
                    .parse::<FormatName>()
                    .map(RangeFormat::Named)
                    .map_err(|err| anyhow!(err))?,
            };
        }
        if let Some(separator) = &self.separator {
            options.separator = separator.clone();
        }
        Ok(options)
    }
}
