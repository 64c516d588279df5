use std::sync::Arc;

use async_trait::async_trait;

use super::persist::persist;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::CartEvent;
use crate::domain::cart::model::CartOutcome;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::session::CartSession;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartOutcome, CartError> {
        self.logger.info(&format!(
            "Adding {} x {} to cart",
            params.quantity, params.product.id
        ));

        let product_id = params.product.id.clone();
        let title = params.product.title.clone();

        let mut state = self.session.lock().await;
        state.ensure_ready()?;
        state.cart.add(params.product, params.quantity)?;

        let warning = persist(
            self.repository.as_ref(),
            &self.session,
            &state,
            self.logger.as_ref(),
        )
        .await;

        self.session.publish(CartEvent::ItemAdded {
            product_id,
            title,
            quantity: params.quantity,
        });

        Ok(CartOutcome {
            cart: state.cart.clone(),
            warning,
        })
    }
}
