//! Customer-facing name and payment card formatting.

use serde::{Deserialize, Serialize};

/// A customer's name parts, either of which may be missing or padded.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerName {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A stored payment card, as it comes back from the payment gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Card brand, e.g. "visa"; omitted from display when absent
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub last4: String,
    pub exp_month: String,
    pub exp_year: String,
}

/// Join the trimmed, non-empty name parts with a single space.
///
/// ```rust
/// use shopfmt_core::{format_customer_name, CustomerName};
///
/// let name = CustomerName {
///     first_name: Some("  John  ".to_string()),
///     last_name: Some("  Smith  ".to_string()),
/// };
/// assert_eq!(format_customer_name(&name), "John Smith");
/// ```
pub fn format_customer_name(name: &CustomerName) -> String {
    [name.first_name.as_deref(), name.last_name.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// `MM/YY` card expiration: month zero-padded to two digits, year
/// truncated to its last two.
pub fn format_card_expiration(month: &str, year: &str) -> String {
    format!("{}/{}", last_chars(&format!("0{month}"), 2), last_chars(year, 2))
}

/// `VISA 4242 exp 06/20`; the brand is uppercased and dropped entirely
/// when absent.
pub fn format_credit_card(card: &Card) -> String {
    let expiration = format_card_expiration(&card.exp_month, &card.exp_year);
    match &card.kind {
        Some(kind) => format!("{} {} exp {expiration}", kind.to_uppercase(), card.last4),
        None => format!("{} exp {expiration}", card.last4),
    }
}

fn last_chars(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    match s.char_indices().nth(count.saturating_sub(n)) {
        Some((idx, _)) => &s[idx..],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_name_trims_and_joins() {
        let cases = [
            (Some("john  "), None, "john"),
            (Some("john"), Some("smIth"), "john smIth"),
            (None, Some("Smith"), "Smith"),
            (Some("  John  "), Some("  Smith  "), "John Smith"),
            (Some("   "), Some("Smith"), "Smith"),
            (None, None, ""),
        ];
        for (first, last, expected) in cases {
            let name = CustomerName {
                first_name: first.map(String::from),
                last_name: last.map(String::from),
            };
            assert_eq!(format_customer_name(&name), expected);
        }
    }

    #[test]
    fn credit_card_with_a_brand() {
        let card = Card {
            kind: Some("visa".to_string()),
            last4: "4242".to_string(),
            exp_month: "6".to_string(),
            exp_year: "2020".to_string(),
        };
        assert_eq!(format_credit_card(&card), "VISA 4242 exp 06/20");
    }

    #[test]
    fn credit_card_without_a_brand() {
        let card = Card {
            kind: None,
            last4: "4242".to_string(),
            exp_month: "6".to_string(),
            exp_year: "2020".to_string(),
        };
        assert_eq!(format_credit_card(&card), "4242 exp 06/20");
    }

    #[test]
    fn card_expiration_padding() {
        assert_eq!(format_card_expiration("6", "2020"), "06/20");
        assert_eq!(format_card_expiration("12", "2020"), "12/20");
        assert_eq!(format_card_expiration("06", "2020"), "06/20");
        assert_eq!(format_card_expiration("6", "20"), "06/20");
    }
}
