use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartOutcome};

#[derive(Default)]
pub struct ClearCartParams {
    /// When set, the cart is only cleared if it still equals this snapshot;
    /// otherwise the call fails with [`CartError::Modified`].
    pub expected: Option<Cart>,
}

#[async_trait]
pub trait ClearCartUseCase: Send + Sync {
    async fn execute(&self, params: ClearCartParams) -> Result<CartOutcome, CartError>;
}
