#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaxError {
    #[error("tax.invalid_rate")]
    InvalidRate,
    #[error("tax.invalid_subtotal")]
    InvalidSubtotal,
    #[error("tax.calculation_failed: {0}")]
    CalculationFailed(String),
}
