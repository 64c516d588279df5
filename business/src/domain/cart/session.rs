use tokio::sync::{Mutex, MutexGuard, broadcast};

use super::errors::CartError;
use super::events::CartEvent;
use super::model::Cart;

const EVENT_BUFFER: usize = 64;

/// Cart contents plus whether the persisted slot has been read yet.
#[derive(Debug, Default)]
pub struct CartState {
    pub cart: Cart,
    pub ready: bool,
}

impl CartState {
    /// Mutations are refused until the persisted slot has been read.
    pub fn ensure_ready(&self) -> Result<(), CartError> {
        if self.ready {
            Ok(())
        } else {
            Err(CartError::NotReady)
        }
    }
}

/// Owned cart state container shared by the cart use cases.
///
/// Mutations go through [`CartSession::lock`], which serializes them in
/// the order they were issued. Observers follow changes with
/// [`CartSession::subscribe`].
pub struct CartSession {
    state: Mutex<CartState>,
    events: broadcast::Sender<CartEvent>,
}

impl CartSession {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self {
            state: Mutex::new(CartState::default()),
            events,
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, CartState> {
        self.state.lock().await
    }

    pub async fn snapshot(&self) -> Cart {
        self.state.lock().await.cart.clone()
    }

    pub async fn is_ready(&self) -> bool {
        self.state.lock().await.ready
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CartEvent> {
        self.events.subscribe()
    }

    /// Publishing with no subscribers is not an error.
    pub fn publish(&self, event: CartEvent) {
        let _ = self.events.send(event);
    }
}

impl Default for CartSession {
    fn default() -> Self {
        Self::new()
    }
}
