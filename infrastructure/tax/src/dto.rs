use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Significant digits an `f64` carries without loss.
///
/// Amounts travel as JSON numbers, so values with more digits than this
/// cannot cross the contract exactly and are refused on both sides.
pub const MAX_WIRE_DIGITS: u32 = 15;

/// Whether `value` survives the trip through a JSON number unchanged.
pub fn fits_wire(value: Decimal) -> bool {
    let digits = value
        .normalize()
        .mantissa()
        .unsigned_abs()
        .checked_ilog10()
        .map_or(0, |log| log + 1);
    digits <= MAX_WIRE_DIGITS
}

/// Request body of the sales tax call: `{subtotal, taxRate}`.
///
/// Both amounts are limited to [`MAX_WIRE_DIGITS`] significant digits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateSalesTaxInput {
    #[serde(with = "rust_decimal::serde::float")]
    pub subtotal: Decimal,
    /// Fraction, e.g. `0.08` for 8%.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_rate: Decimal,
}

/// Response body of the sales tax call: `{salesTax, total}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculateSalesTaxOutput {
    #[serde(with = "rust_decimal::serde::float")]
    pub sales_tax: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}
