use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartOutcome;

/// Loads the persisted cart into the session and marks it ready.
#[async_trait]
pub trait RestoreCartUseCase: Send + Sync {
    async fn execute(&self) -> Result<CartOutcome, CartError>;
}
