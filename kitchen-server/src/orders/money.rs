//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are stored as `f64`; sums are done in `Decimal` and rounded back
//! to 2 decimal places, half away from zero.

use rust_decimal::prelude::*;

const DECIMAL_PLACES: u32 = 2;

#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// `price × quantity` for one line
pub fn line_total(price: f64, quantity: i32) -> Decimal {
    to_decimal(price) * Decimal::from(quantity)
}

/// Σ(price × quantity), rounded for storage
pub fn order_total<I>(lines: I) -> f64
where
    I: IntoIterator<Item = (f64, i32)>,
{
    let total: Decimal = lines
        .into_iter()
        .map(|(price, quantity)| line_total(price, quantity))
        .sum();
    to_f64(total)
}
