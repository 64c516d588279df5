use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::tax::model::SalesTaxQuote;

/// Prices tax for the current cart subtotal at the checkout's rate.
#[async_trait]
pub trait CalculateCheckoutTaxUseCase: Send + Sync {
    async fn execute(&self) -> Result<SalesTaxQuote, CheckoutError>;
}
