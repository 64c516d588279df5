use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::tax::model::{SalesTaxQuote, TaxRate};

pub struct SetTaxRateParams {
    pub tax_rate: TaxRate,
}

/// Changes the rate and recalculates; earlier quotes are discarded.
#[async_trait]
pub trait SetTaxRateUseCase: Send + Sync {
    async fn execute(&self, params: SetTaxRateParams) -> Result<SalesTaxQuote, CheckoutError>;
}
