use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartOutcome;
use crate::domain::shared::value_objects::ProductId;

pub struct UpdateCartItemQuantityParams {
    pub product_id: ProductId,
    /// Zero or below removes the line.
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateCartItemQuantityUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateCartItemQuantityParams,
    ) -> Result<CartOutcome, CartError>;
}
