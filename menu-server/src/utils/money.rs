//! Price normalisation using rust_decimal
//!
//! Prices are held as `f64` on the wire and in SQLite; every value that
//! enters the catalog is passed through `Decimal` and rounded to 2 places.

use rust_decimal::prelude::*;

use crate::utils::{AppError, ErrorCode};

/// 2 decimal places, half-up
const DECIMAL_PLACES: u32 = 2;

/// Largest value a DECIMAL(10,2) column holds: 99,999,999.99
///
/// Mantissa 9_999_999_999 split into low/mid 32-bit words.
const MAX_PRICE: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Validate and round a price to 2 decimal places
pub fn normalize_price(value: f64) -> Result<f64, AppError> {
    if !value.is_finite() {
        return Err(invalid_price(format!(
            "Price must be a finite number, got {}",
            value
        )));
    }
    let price = Decimal::from_f64(value)
        .ok_or_else(|| invalid_price(format!("Price {} is not representable", value)))?
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);

    if price.is_sign_negative() && !price.is_zero() {
        return Err(invalid_price(format!("Price must not be negative, got {}", value)));
    }
    if price > MAX_PRICE {
        return Err(invalid_price(format!(
            "Price exceeds maximum allowed ({}), got {}",
            MAX_PRICE, value
        )));
    }
    Ok(price.to_f64().unwrap_or_default())
}

fn invalid_price(message: String) -> AppError {
    AppError::with_message(ErrorCode::MenuItemInvalidPrice, message)
}
