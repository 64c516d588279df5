use async_trait::async_trait;

use super::errors::TaxError;
use super::model::{SalesTaxQuote, SalesTaxRequest};

/// Port to the collaborator that prices sales tax for an order.
///
/// Implementations must round as [`super::model::calculate_sales_tax`]
/// does and report any failure to produce a result as
/// [`TaxError::CalculationFailed`].
#[async_trait]
pub trait SalesTaxCalculator: Send + Sync {
    async fn calculate(&self, request: SalesTaxRequest) -> Result<SalesTaxQuote, TaxError>;
}
