//! Product and promo code display names.
//!
//! Products carry optional nested detail ("muffin of the week" style
//! rotating items), and any of it may be missing on a given record. Access
//! goes through the type system's optional chaining; a missing name never
//! crashes display code, it just renders as an empty string.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, Result};
use crate::money::{format_money, MoneyOptions};

/// Rotating "of the" detail attached to a product.
#[derive(Debug, Clone, Default)]
pub struct OfThe {
    pub enabled: bool,
    pub name: Option<String>,
}

/// Context handed to a product's availability predicate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PickupQuery {
    pub pickup_date: Option<Timestamp>,
}

/// Availability predicate for a product's rotating detail.
pub type AvailabilityCheck = Box<dyn Fn(&PickupQuery) -> bool + Send + Sync>;

/// A product or line item, with every field optional the way catalog data
/// actually arrives.
#[derive(Default)]
pub struct Product {
    pub name: Option<String>,
    pub stack_name: Option<String>,
    pub of_the: Option<OfThe>,
    pub of_the_is_available_for: Option<AvailabilityCheck>,
}

impl fmt::Debug for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Product")
            .field("name", &self.name)
            .field("stack_name", &self.stack_name)
            .field("of_the", &self.of_the)
            .field(
                "of_the_is_available_for",
                &self.of_the_is_available_for.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}

/// Display variant for [`format_product_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductNameVariant {
    /// Use the product's stack name
    Stack,
}

/// Options for [`format_product_name`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductNameOptions {
    pub variant: Option<ProductNameVariant>,
    /// Show only the rotating detail name, without the "{name}: " prefix
    pub exclude_product_name: bool,
    pub pickup_date: Option<Timestamp>,
}

/// Resolve a product's display name.
///
/// The stack variant short-circuits to the stack name. Otherwise, when the
/// availability predicate approves the pickup date and a rotating detail
/// name exists, the result is `"{name}: {detailName}"` (or the detail name
/// alone with `exclude_product_name`). Everything else falls back to the
/// plain product name.
pub fn format_product_name(product: &Product, options: &ProductNameOptions) -> String {
    if options.variant == Some(ProductNameVariant::Stack) {
        return product.stack_name.clone().unwrap_or_default();
    }

    let available = product
        .of_the_is_available_for
        .as_ref()
        .is_some_and(|check| {
            check(&PickupQuery {
                pickup_date: options.pickup_date,
            })
        });
    let of_the_name = product.of_the.as_ref().and_then(|of_the| of_the.name.as_deref());

    if available {
        if let Some(of_the_name) = of_the_name {
            if options.exclude_product_name {
                return of_the_name.to_string();
            }
            return format!("{}: {of_the_name}", product.name.as_deref().unwrap_or_default());
        }
    }
    product.name.clone().unwrap_or_default()
}

/// A promo code's value and its type discriminator.
///
/// The type arrives as a string from upstream systems; anything other than
/// `"dollar"` or `"percent"` is unrecognized configuration and fails loud.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromoCode {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
}

/// `$5` for dollar codes, `5%` for percent codes.
pub fn format_promo_code_value(promo: &PromoCode) -> Result<String> {
    match promo.kind.as_str() {
        "dollar" => Ok(format_money(
            promo.value,
            &MoneyOptions {
                whole_number_precision: Some(0),
                ..MoneyOptions::default()
            },
        )),
        "percent" => Ok(format!("{}%", promo.value)),
        _ => Err(FormatError::unhandled_promo_type(&promo.kind)),
    }
}
