use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Durable slot holding the serialized cart between restarts.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored yet.
    async fn load(&self) -> Result<Option<Cart>, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
}
