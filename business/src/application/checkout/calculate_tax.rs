use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::session::CartSession;
use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::session::CheckoutSession;
use crate::domain::checkout::use_cases::calculate_tax::CalculateCheckoutTaxUseCase;
use crate::domain::logger::Logger;
use crate::domain::tax::model::{SalesTaxQuote, SalesTaxRequest};
use crate::domain::tax::services::SalesTaxCalculator;

pub struct CalculateCheckoutTaxUseCaseImpl {
    pub cart: Arc<CartSession>,
    pub checkout: Arc<CheckoutSession>,
    pub calculator: Arc<dyn SalesTaxCalculator>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CalculateCheckoutTaxUseCase for CalculateCheckoutTaxUseCaseImpl {
    async fn execute(&self) -> Result<SalesTaxQuote, CheckoutError> {
        let subtotal = self.cart.snapshot().await.subtotal();

        let (generation, tax_rate) = {
            let mut state = self.checkout.lock().await;
            if subtotal.is_zero() {
                state.reset();
                return Err(CheckoutError::EmptyCart);
            }
            (state.begin_calculation(), state.tax_rate)
        };

        self.logger.info(&format!(
            "Calculating sales tax for {} at {} (generation {})",
            subtotal, tax_rate, generation
        ));

        let result = self
            .calculator
            .calculate(SalesTaxRequest { subtotal, tax_rate })
            .await;

        let mut state = self.checkout.lock().await;
        match result {
            Ok(quote) => {
                if !state.complete(generation, subtotal, quote) {
                    self.logger.debug(&format!(
                        "Discarding tax result of superseded generation {}",
                        generation
                    ));
                    return Err(CheckoutError::Superseded);
                }
                self.logger.info(&format!(
                    "Sales tax {} / total {}",
                    quote.sales_tax, quote.total
                ));
                Ok(quote)
            }
            Err(err) => {
                if !state.fail(generation) {
                    return Err(CheckoutError::Superseded);
                }
                self.logger
                    .error(&format!("Tax calculation failed: {}", err));
                Err(CheckoutError::TaxCalculationFailed(err))
            }
        }
    }
}
