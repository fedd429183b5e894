//! shopfmt CLI application
//!
//! Thin command-line front end over `shopfmt-core`, for rendering retail
//! display strings from shell scripts and templating pipelines.

mod args;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use clap::Parser;
use jiff::Timestamp;
use log::debug;
use shopfmt_core::{
    format_credit_card, format_customer_name, format_location, format_money, format_percentage,
    format_phone, format_promo_code_value, normalize_phone, normalize_zip, Card, CustomerName,
    Formatter, Location, MoneyOptions, PromoCode, TimeWindow,
};

fn main() -> Result<()> {
    env_logger::init();

    let Cli { timezone, command } = Cli::parse();
    let formatter = Formatter::new();

    let output = match command {
        Commands::Date { instant, format } => {
            debug!("formatting instant with '{format}' in {timezone}");
            formatter.format_date(Some(parse_instant(&instant)?), &format, &timezone)?
        }
        Commands::Day { day, format } => formatter.format_day(&day, &format),
        Commands::TimeRange(range) => {
            let options = range.to_options()?;
            formatter.format_time_range(
                parse_instant(&range.start)?,
                parse_instant(&range.end)?,
                &timezone,
                &options,
            )?
        }
        Commands::DateRange(range) => {
            let options = range.to_options()?;
            formatter.format_date_range(
                parse_instant(&range.start)?,
                parse_instant(&range.end)?,
                &timezone,
                &options,
            )?
        }
        Commands::DeliveryWindow { start, end } => {
            let window = TimeWindow {
                start_at: parse_instant(&start)?,
                end_at: parse_instant(&end)?,
            };
            formatter.format_delivery_window(&window, &timezone)?
        }
        Commands::Money {
            value,
            precision,
            whole_number_precision,
        } => format_money(
            value,
            &MoneyOptions {
                precision,
                whole_number_precision,
            },
        ),
        Commands::Percentage { value } => format_percentage(value),
        Commands::NormalizePhone { phone } => normalize_phone(Some(&phone)),
        Commands::Phone { phone } => format_phone(Some(&phone)).unwrap_or_default(),
        Commands::Zip { zip } => normalize_zip(Some(&zip)).unwrap_or_default(),
        Commands::Card { json } => {
            let card: Card = serde_json::from_str(&json).context("invalid card record")?;
            format_credit_card(&card)
        }
        Commands::CustomerName { json } => {
            let name: CustomerName =
                serde_json::from_str(&json).context("invalid customer name record")?;
            format_customer_name(&name)
        }
        Commands::Promo { json } => {
            let promo: PromoCode =
                serde_json::from_str(&json).context("invalid promo code record")?;
            format_promo_code_value(&promo)?
        }
        Commands::Location { json, format } => {
            let location: Location =
                serde_json::from_str(&json).context("invalid location record")?;
            format_location(&location, &format)
        }
    };

    println!("{output}");
    Ok(())
}

fn parse_instant(instant: &str) -> Result<Timestamp> {
    instant
        .parse()
        .with_context(|| format!("invalid instant '{instant}'; expected RFC 3339"))
}
