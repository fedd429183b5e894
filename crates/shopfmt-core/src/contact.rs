//! Phone number and zip code normalization.
//!
//! Everything here is fail-soft: input that does not match the expected
//! shape passes through unchanged so that display code never crashes on
//! dirty contact data.

/// Normalize a phone number to E.164-ish form.
///
/// Strips non-digits, then prefixes `+` when the input already carries a
/// country code (a leading `+`, or an 11-digit number starting with 1) and
/// `+1` otherwise, presuming US. Missing or empty input normalizes to the
/// empty string.
///
/// Normalizing twice is stable: the first pass's `+` marks the country
/// code, so the second pass is the identity.
pub fn normalize_phone(phone: Option<&str>) -> String {
    let Some(phone) = phone.filter(|p| !p.is_empty()) else {
        return String::new();
    };
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    let has_country_code =
        phone.trim_start().starts_with('+') || (digits.len() == 11 && digits.starts_with('1'));
    if has_country_code {
        format!("+{digits}")
    } else {
        format!("+1{digits}")
    }
}

/// Format a US phone number as `NNN-NNN-NNNN`.
///
/// Accepts an optional `+` and an optional leading country code 1 around
/// ten digits. Anything else, including `None`, passes through unchanged.
pub fn format_phone(phone: Option<&str>) -> Option<String> {
    let phone = phone?;
    match us_subscriber_digits(phone) {
        Some(digits) => Some(format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..])),
        None => Some(phone.to_string()),
    }
}

/// Extract the ten subscriber digits from `+?1?NNNNNNNNNN`, if the string
/// has exactly that shape.
fn us_subscriber_digits(phone: &str) -> Option<&str> {
    let rest = phone.strip_prefix('+').unwrap_or(phone);
    let rest = if rest.len() == 11 {
        rest.strip_prefix('1')?
    } else {
        rest
    };
    if rest.len() == 10 && rest.bytes().all(|b| b.is_ascii_digit()) {
        Some(rest)
    } else {
        None
    }
}

/// Extract the leading five digits of a zip code, discarding any `-XXXX`
/// suffix. Non-matching input (including `None`) passes through unchanged.
pub fn normalize_zip(zip: Option<&str>) -> Option<String> {
    let zip = zip?;
    let trimmed = zip.trim_start();
    let leading: String = trimmed
        .chars()
        .take(5)
        .take_while(char::is_ascii_digit)
        .collect();
    if leading.len() == 5 {
        Some(leading)
    } else {
        Some(zip.to_string())
    }
}
