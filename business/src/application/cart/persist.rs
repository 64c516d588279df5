use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::CartEvent;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::session::{CartSession, CartState};
use crate::domain::logger::Logger;

/// Writes the cart to its slot.
///
/// A failed write is returned as a warning and published; the in-memory
/// cart stays as it is.
pub(super) async fn persist(
    repository: &dyn CartRepository,
    session: &CartSession,
    state: &CartState,
    logger: &dyn Logger,
) -> Option<CartError> {

    match repository.save(&state.cart).await {
        Ok(()) => None,
        Err(err) => {
            logger.error(&format!("Failed to save cart: {}", err));
            session.publish(CartEvent::SaveFailed);
            Some(CartError::SaveFailed(err))
        }
    }
}
