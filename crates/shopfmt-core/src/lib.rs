//! Core library for the shopfmt display-formatting toolkit.
//!
//! This crate presents retail domain values — dates, times, money, phone
//! numbers, zip codes, names, product names, promo codes, addresses — in
//! human-readable form. It is a utility layer: every formatter is a pure
//! function of its arguments, there is no shared mutable state, and the
//! only ambient input (the current instant, for "today"/"tomorrow"
//! classification) is injected through a [`Clock`].
//!
//! # Architecture
//!
//! - **Format registry** ([`registry`]): a closed set of symbolic format
//!   names, each resolving to a strftime template or a custom function.
//! - **Dispatcher** ([`Formatter`]): resolves names against the registry
//!   and renders instants through the `jiff` date engine; owns the clock
//!   for the relative-day formats.
//! - **Independent formatters** ([`money`], [`contact`], [`customer`],
//!   [`product`], [`location`]): free functions with no shared state.
//!
//! Error handling is split deliberately: display code must not crash on
//! dirty data, so malformed inputs pass through or render empty, while a
//! missing timezone or an unknown promo code type indicates a caller bug
//! and fails with a [`FormatError`].
//!
//! # Quick Start
//!
//! ```rust
//! use shopfmt_core::{format_money, Formatter, MoneyOptions};
//!
//! # fn example() -> shopfmt_core::Result<()> {
//! let formatter = Formatter::new();
//! let cutoff: jiff::Timestamp = "2014-03-08T17:00:00Z".parse().unwrap();
//!
//! assert_eq!(formatter.format_date(Some(cutoff), "mailChimpDate", "UTC")?, "03/08/2014");
//! assert_eq!(formatter.format_date(Some(cutoff), "shortTime", "UTC")?, "5pm");
//! assert_eq!(format_money(40.0, &MoneyOptions::default()), "$40.00");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod clock;
pub mod contact;
pub mod customer;
pub mod date;
pub mod error;
pub mod location;
pub mod money;
pub mod product;
pub mod range;
pub mod registry;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use contact::{format_phone, normalize_phone, normalize_zip};
pub use customer::{
    format_card_expiration, format_credit_card, format_customer_name, Card, CustomerName,
};
pub use date::Formatter;
pub use error::{FormatError, Result};
pub use location::{format_location, Location};
pub use money::{format_money, format_number, format_percentage, unformat, MoneyOptions};
pub use product::{
    format_product_name, format_promo_code_value, AvailabilityCheck, OfThe, PickupQuery, Product,
    ProductNameOptions, ProductNameVariant, PromoCode,
};
pub use range::{RangeFormat, RangeOptions, TimeWindow};
pub use registry::{CustomFormat, DayFormatName, FormatEntry, FormatName};
