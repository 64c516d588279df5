use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartOutcome;
use crate::domain::product::model::Product;

pub struct AddCartItemParams {
    pub product: Product,
    pub quantity: u32,
}

impl AddCartItemParams {
    pub fn single(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartOutcome, CartError>;
}
