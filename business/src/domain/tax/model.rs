use rust_decimal::Decimal;

use super::errors::TaxError;
use crate::domain::shared::money::round_currency;

/// Sales tax rate as a non-negative fraction (0.08 for 8%).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate(Decimal);

impl TaxRate {
    pub fn new(fraction: Decimal) -> Result<Self, TaxError> {
        if fraction.is_sign_negative() && !fraction.is_zero() {
            return Err(TaxError::InvalidRate);
        }
        Ok(Self(fraction))
    }

    /// Builds a rate from a percentage, e.g. `8` for 8%.
    pub fn from_percent(percent: Decimal) -> Result<Self, TaxError> {
        Self::new(percent / Decimal::ONE_HUNDRED)
    }

    pub fn fraction(&self) -> Decimal {
        self.0
    }

    pub fn as_percent(&self) -> Decimal {
        self.0 * Decimal::ONE_HUNDRED
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self(Decimal::new(8, 2))
    }
}

impl std::fmt::Display for TaxRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.as_percent().normalize())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesTaxRequest {
    pub subtotal: Decimal,
    pub tax_rate: TaxRate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalesTaxQuote {
    pub sales_tax: Decimal,
    pub total: Decimal,
}

/// Prices sales tax for a subtotal.
///
/// The tax is rounded to cents first, then added to the subtotal and the
/// sum rounded again. The result can differ by a cent from rounding
/// `subtotal * (1 + rate)` once; callers rely on this order.
pub fn calculate_sales_tax(request: &SalesTaxRequest) -> Result<SalesTaxQuote, TaxError> {
    if request.subtotal.is_sign_negative() && !request.subtotal.is_zero() {
        return Err(TaxError::InvalidSubtotal);
    }

    let sales_tax = round_currency(request.subtotal * request.tax_rate.fraction());
    let total = round_currency(request.subtotal + sales_tax);

    Ok(SalesTaxQuote { sales_tax, total })
}
