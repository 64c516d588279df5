use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartOutcome;
use crate::domain::shared::value_objects::ProductId;

pub struct RemoveCartItemParams {
    pub product_id: ProductId,
}

#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<CartOutcome, CartError>;
}
