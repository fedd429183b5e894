//! Error types for the formatting library.
//!
//! Most formatters here degrade gracefully on bad data: malformed day
//! strings, unparseable phone numbers and missing name parts all pass
//! through or render as empty strings. The errors below are reserved for
//! caller bugs (a missing or unknown timezone) and unrecognized
//! configuration (an unhandled promo code type).

use thiserror::Error;

/// Comprehensive error type for all formatting operations.
#[derive(Error, Debug)]
pub enum FormatError {
    /// A date-rendering call was made without a timezone identifier
    #[error("timezone id is required")]
    MissingTimezone,
    /// The supplied timezone identifier is not in the IANA database
    #[error("unknown timezone id '{tzid}'")]
    Timezone {
        tzid: String,
        #[source]
        source: jiff::Error,
    },
    /// A promo code carried a type the formatter does not understand
    #[error("unhandled promo code type: {kind}")]
    UnhandledPromoType { kind: String },
    /// Template rendering or date arithmetic failed in the date engine
    #[error("date rendering error: {source}")]
    Date {
        #[from]
        source: jiff::Error,
    },
}

impl FormatError {
    /// Creates a timezone lookup error for the given identifier.
    pub fn timezone(tzid: impl Into<String>, source: jiff::Error) -> Self {
        Self::Timezone {
            tzid: tzid.into(),
            source,
        }
    }

    /// Creates an unhandled promo code type error.
    pub fn unhandled_promo_type(kind: impl Into<String>) -> Self {
        Self::UnhandledPromoType { kind: kind.into() }
    }
}

/// Result type alias for formatting operations
pub type Result<T> = std::result::Result<T, FormatError>;
