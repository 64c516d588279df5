use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::OrderConfirmation;

#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self) -> Result<OrderConfirmation, CheckoutError>;
}
