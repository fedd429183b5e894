//! Street address formatting.

use serde::{Deserialize, Serialize};

/// A pickup or delivery location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Location {
    pub name: Option<String>,
    pub address: String,
    pub address2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Render a location with the named layout.
///
/// `"full"` produces `"{address}, {address2, }{city}, {state} {zip}"`,
/// with the second address line dropped when absent or empty. Unrecognized
/// layout names degrade to the full layout rather than failing.
///
/// ```rust
/// use shopfmt_core::{format_location, Location};
///
/// let hq = Location {
///     name: Some("Good Eggs HQ".to_string()),
///     address: "530 Hampshire Street".to_string(),
///     address2: Some("Suite 301".to_string()),
///     city: "San Francisco".to_string(),
///     state: "CA".to_string(),
///     zip: "94110".to_string(),
/// };
/// assert_eq!(
///     format_location(&hq, "full"),
///     "530 Hampshire Street, Suite 301, San Francisco, CA 94110",
/// );
/// ```
pub fn format_location(location: &Location, format: &str) -> String {
    let address2 = location
        .address2
        .as_deref()
        .filter(|line| !line.is_empty())
        .map(|line| format!("{line}, "))
        .unwrap_or_default();
    let full = format!(
        "{}, {address2}{}, {} {}",
        location.address, location.city, location.state, location.zip
    );
    match format {
        "full" => full,
        // unrecognized layout names degrade to the full layout
        _ => full,
    }
}
