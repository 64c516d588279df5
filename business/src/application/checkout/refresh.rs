use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;

use crate::domain::cart::events::CartEvent;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::use_cases::calculate_tax::CalculateCheckoutTaxUseCase;
use crate::domain::logger::Logger;

/// Recalculates the checkout tax whenever the cart contents change.
pub struct TaxRefresher {
    pub calculate: Arc<dyn CalculateCheckoutTaxUseCase>,
    pub logger: Arc<dyn Logger>,
}

impl TaxRefresher {
    pub async fn on_event(&self, event: &CartEvent) {
        if !event.changes_contents() {
            return;
        }
        self.refresh().await;
    }

    async fn refresh(&self) {
        match self.calculate.execute().await {
            Ok(_) | Err(CheckoutError::EmptyCart) | Err(CheckoutError::Superseded) => {}
            Err(err) => self
                .logger
                .warn(&format!("Tax refresh after cart change failed: {}", err)),
        }
    }

    /// Runs until every sender of `events` is dropped.
    pub fn spawn(self, mut events: broadcast::Receiver<CartEvent>) -> JoinHandle<()> {
        tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => self.on_event(&event).await,
                    Err(RecvError::Lagged(skipped)) => {
                        self.logger.debug(&format!(
                            "Tax refresher skipped {} cart events",
                            skipped
                        ));
                        self.refresh().await;
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        })
    }
}
