//! Currency and number formatting.

use serde::{Deserialize, Serialize};

/// Options for [`format_money`].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyOptions {
    /// Decimal places; defaults to 2
    pub precision: Option<u8>,
    /// Precision override applied when the amount has no fractional cents,
    /// so 30 renders as `$30` while 29.99 stays `$29.99`
    pub whole_number_precision: Option<u8>,
}

/// Format a dollar amount.
///
/// Negative amounts render as `-$X`. Floating-point noise within a cent is
/// rounded away before the whole-number check, so `40.000000000003` counts
/// as a whole $40.
///
/// # Examples
///
/// ```rust
/// use shopfmt_core::{format_money, MoneyOptions};
///
/// assert_eq!(format_money(40.5, &MoneyOptions::default()), "$40.50");
/// assert_eq!(format_money(-42.5, &MoneyOptions::default()), "-$42.50");
///
/// let whole = MoneyOptions {
///     whole_number_precision: Some(0),
///     ..MoneyOptions::default()
/// };
/// assert_eq!(format_money(40.0, &whole), "$40");
/// assert_eq!(format_money(40.5, &whole), "$40.50");
/// ```
pub fn format_money(value: f64, options: &MoneyOptions) -> String {
    let mut precision = options.precision.unwrap_or(2);
    if let Some(whole) = options.whole_number_precision {
        if (value * 100.0).round() % 100.0 == 0.0 {
            precision = whole;
        }
    }
    let magnitude = format_number(value.abs(), precision);
    if value < 0.0 {
        format!("-${magnitude}")
    } else {
        format!("${magnitude}")
    }
}

/// Format a number with thousands separators at the given precision.
pub fn format_number(value: f64, precision: u8) -> String {
    let rendered = format!("{value:.precision$}", precision = precision as usize);
    let (number, fraction) = match rendered.split_once('.') {
        Some((number, fraction)) => (number, Some(fraction)),
        None => (rendered.as_str(), None),
    };
    let (sign, digits) = match number.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", number),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Round to two decimals and append `%`, trimming trailing zeros.
pub fn format_percentage(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let mut rendered = format!("{rounded:.2}");
    while rendered.ends_with('0') {
        rendered.pop();
    }
    if rendered.ends_with('.') {
        rendered.pop();
    }
    format!("{rendered}%")
}

/// Strip currency formatting back to a number.
///
/// Inverse of [`format_money`] for well-formed input; anything that does
/// not contain a parseable number comes back as 0.
pub fn unformat(value: &str) -> f64 {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_money_default_behavior() {
        let options = MoneyOptions::default();
        assert_eq!(format_money(40.5, &options), "$40.50");
        assert_eq!(format_money(40.0, &options), "$40.00");
        assert_eq!(format_money(40.000000000003, &options), "$40.00");
        assert_eq!(format_money(39.999999999993, &options), "$40.00");
        assert_eq!(format_money(-42.5, &options), "-$42.50");
        assert_eq!(format_money(0.0, &options), "$0.00");
    }

    #[test]
    fn format_money_with_whole_number_precision() {
        let options = MoneyOptions {
            whole_number_precision: Some(0),
            ..MoneyOptions::default()
        };
        assert_eq!(format_money(40.5, &options), "$40.50");
        assert_eq!(format_money(40.0, &options), "$40");
        assert_eq!(format_money(40.000000000003, &options), "$40");
        assert_eq!(format_money(39.999999999993, &options), "$40");
        assert_eq!(format_money(-42.5, &options), "-$42.50");
        assert_eq!(format_money(0.0, &options), "$0");
    }

    #[test]
    fn format_money_with_explicit_precision() {
        let options = MoneyOptions {
            precision: Some(3),
            ..MoneyOptions::default()
        };
        assert_eq!(format_money(40.125, &options), "$40.125");
    }

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(-1234.5, 2), "-1,234.50");
        assert_eq!(format_number(0.5, 2), "0.50");
    }

    #[test]
    fn format_percentage_trims_trailing_zeros() {
        assert_eq!(format_percentage(5.0), "5%");
        assert_eq!(format_percentage(5.5), "5.5%");
        assert_eq!(format_percentage(5.25), "5.25%");
        assert_eq!(format_percentage(5.256), "5.26%");
        assert_eq!(format_percentage(0.0), "0%");
    }

    #[test]
    fn unformat_strips_currency_decoration() {
        assert_eq!(unformat("$12,345.67"), 12345.67);
        assert_eq!(unformat("-$42.50"), -42.5);
        assert_eq!(unformat("$40"), 40.0);
        assert_eq!(unformat("not a number"), 0.0);
    }
}
