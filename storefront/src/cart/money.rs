//! Money calculation utilities using rust_decimal for precision
//!
//! All accumulation is done in `Decimal`; values convert to `f64` rounded to
//! 2 decimal places (half-up) only at storage/serialization boundaries, so
//! rounding error never compounds across lines.

use rust_decimal::prelude::*;
use shared::models::{CartLineItem, SelectedCustomization};

use super::CartError;

/// Rounding for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed price per item
const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per line
pub(crate) const MAX_QUANTITY: u32 = 9999;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Per-unit price: base price plus the sum of customization price changes
/// (a missing `price_change` counts as 0).
pub fn unit_price(line: &CartLineItem) -> Decimal {
    let modifier: Decimal = line
        .customizations
        .as_ref()
        .map(|cs| cs.iter().filter_map(|c| c.price_change.map(to_decimal)).sum())
        .unwrap_or(Decimal::ZERO);
    to_decimal(line.price) + modifier
}

/// Line subtotal: unit price times quantity. Unrounded.
pub fn item_subtotal(line: &CartLineItem) -> Decimal {
    unit_price(line) * Decimal::from(line.quantity)
}

/// Total across all lines, accumulated without intermediate rounding.
pub fn cart_total(lines: &[CartLineItem]) -> Decimal {
    lines.iter().map(item_subtotal).sum()
}

#[inline]
fn require_finite(value: f64, field_name: &str) -> Result<(), CartError> {
    if !value.is_finite() {
        return Err(CartError::InvalidItem(format!(
            "{} must be a finite number, got {}",
            field_name, value
        )));
    }
    Ok(())
}

/// Validate an item, quantity, and customization set before they enter the cart.
pub fn validate_line(
    price: f64,
    quantity: u32,
    customizations: Option<&[SelectedCustomization]>,
) -> Result<(), CartError> {
    require_finite(price, "price")?;
    if price < 0.0 {
        return Err(CartError::InvalidItem(format!(
            "price must be non-negative, got {}",
            price
        )));
    }
    if price > MAX_PRICE {
        return Err(CartError::InvalidItem(format!(
            "price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, price
        )));
    }

    if quantity == 0 {
        return Err(CartError::InvalidItem(
            "quantity must be positive".to_string(),
        ));
    }
    if quantity > MAX_QUANTITY {
        return Err(CartError::InvalidItem(format!(
            "quantity exceeds maximum allowed ({}), got {}",
            MAX_QUANTITY, quantity
        )));
    }

    if let Some(customizations) = customizations {
        for customization in customizations {
            if let Some(change) = customization.price_change {
                require_finite(change, "customization price_change")?;
                if change.abs() > MAX_PRICE {
                    return Err(CartError::InvalidItem(format!(
                        "customization price_change exceeds maximum allowed, got {}",
                        change
                    )));
                }
            }
        }
    }

    Ok(())
}
