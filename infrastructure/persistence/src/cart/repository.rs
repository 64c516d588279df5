use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::{CartLineEntity, cart_from_domain, cart_into_domain};
use crate::store::KeyValueStore;

pub const CART_SLOT_KEY: &str = "storefront_cart";

/// Cart stored as a JSON array of `{product, quantity}` in a single slot.
pub struct CartRepositoryKeyValue {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl CartRepositoryKeyValue {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, CART_SLOT_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryKeyValue {
    async fn load(&self) -> Result<Option<Cart>, RepositoryError> {
        let raw = self.store.get(&self.key).await.map_err(|err| {
            tracing::warn!(slot = %self.key, error = %err, "cart slot read failed");
            RepositoryError::Persistence
        })?;

        let Some(raw) = raw else {
            return Ok(None);
        };

        let entities = serde_json::from_str::<Vec<CartLineEntity>>(&raw).map_err(|err| {
            tracing::warn!(slot = %self.key, error = %err, "cart slot is not a valid cart");
            RepositoryError::Corrupted
        })?;

        Ok(Some(cart_into_domain(entities)))
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let raw = serde_json::to_string(&cart_from_domain(cart))
            .map_err(|_| RepositoryError::Persistence)?;

        self.store.set(&self.key, &raw).await.map_err(|err| {
            tracing::warn!(slot = %self.key, error = %err, "cart slot write failed");
            RepositoryError::Persistence
        })
    }
}
