use std::sync::Arc;

use async_trait::async_trait;

use super::persist::persist;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::CartEvent;
use crate::domain::cart::model::CartOutcome;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::session::CartSession;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCartItemQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemQuantityUseCase for UpdateCartItemQuantityUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateCartItemQuantityParams,
    ) -> Result<CartOutcome, CartError> {
        self.logger.info(&format!(
            "Setting quantity of {} to {}",
            params.product_id, params.quantity
        ));

        let mut state = self.session.lock().await;
        state.ensure_ready()?;
        let matched = state
            .cart
            .set_quantity(&params.product_id, params.quantity)?;

        if !matched {
            self.logger.debug(&format!(
                "Product {} not in cart, quantity unchanged",
                params.product_id
            ));
        }

        let warning = persist(
            self.repository.as_ref(),
            &self.session,
            &state,
            self.logger.as_ref(),
        )
        .await;

        if matched {
            let quantity = state
                .cart
                .find(&params.product_id)
                .map_or(0, |line| line.quantity);
            self.session.publish(CartEvent::QuantityUpdated {
                product_id: params.product_id,
                quantity,
            });
        }

        Ok(CartOutcome {
            cart: state.cart.clone(),
            warning,
        })
    }
}
