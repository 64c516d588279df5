use crate::domain::tax::errors::TaxError;

#[derive(Debug, thiserror::Error)]
pub enum CheckoutError {
    #[error("checkout.empty_cart")]
    EmptyCart,
    #[error("checkout.total_not_calculated")]
    TotalNotCalculated,
    #[error("checkout.order_in_progress")]
    OrderInProgress,
    #[error("checkout.superseded")]
    Superseded,
    #[error("checkout.tax_calculation_failed")]
    TaxCalculationFailed(#[source] TaxError),
}
