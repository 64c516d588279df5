use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::session::CartSession;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::model::OrderConfirmation;
use crate::domain::checkout::session::CheckoutSession;
use crate::domain::checkout::use_cases::place_order::PlaceOrderUseCase;
use crate::domain::logger::Logger;

/// Simulated order placement: waits, then empties the cart.
pub struct PlaceOrderUseCaseImpl {
    pub cart: Arc<CartSession>,
    pub checkout: Arc<CheckoutSession>,
    pub clear_cart: Arc<dyn ClearCartUseCase>,
    pub processing_delay: Duration,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self) -> Result<OrderConfirmation, CheckoutError> {
        let Some(_placement) = self.checkout.begin_order() else {
            return Err(CheckoutError::OrderInProgress);
        };

        let ordered = self.cart.snapshot().await;
        let summary = ordered.summary();
        if summary.item_count == 0 {
            return Err(CheckoutError::EmptyCart);
        }

        let Some(quote) = self.checkout.lock().await.quote_for(summary.subtotal) else {
            self.logger
                .warn("Order refused: total has not been calculated");
            return Err(CheckoutError::TotalNotCalculated);
        };

        self.logger.info(&format!(
            "Placing order for {} items, total {}",
            summary.item_count, quote.total
        ));

        tokio::time::sleep(self.processing_delay).await;

        let cleared = self
            .clear_cart
            .execute(ClearCartParams {
                expected: Some(ordered),
            })
            .await;
        match cleared {
            Ok(outcome) => {
                if let Some(warning) = outcome.warning {
                    self.logger
                        .warn(&format!("Order placed but cart not saved: {}", warning));
                }
            }
            Err(CartError::Modified) => {
                self.logger
                    .warn("Order refused: cart changed while the order was processing");
                self.checkout.lock().await.reset();
                return Err(CheckoutError::TotalNotCalculated);
            }
            Err(err) => self
                .logger
                .warn(&format!("Order placed but cart not cleared: {}", err)),
        }

        let confirmation = OrderConfirmation::new(summary.item_count, summary.subtotal, quote);

        let mut state = self.checkout.lock().await;
        state.reset();
        state.last_order = Some(confirmation.clone());

        self.logger
            .info(&format!("Order {} placed", confirmation.id));
        Ok(confirmation)
    }
}
