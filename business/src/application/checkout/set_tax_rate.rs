use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::checkout::errors::CheckoutError;
use crate::domain::checkout::session::CheckoutSession;
use crate::domain::checkout::use_cases::calculate_tax::CalculateCheckoutTaxUseCase;
use crate::domain::checkout::use_cases::set_tax_rate::{SetTaxRateParams, SetTaxRateUseCase};
use crate::domain::logger::Logger;
use crate::domain::tax::model::SalesTaxQuote;

pub struct SetTaxRateUseCaseImpl {
    pub checkout: Arc<CheckoutSession>,
    pub calculate: Arc<dyn CalculateCheckoutTaxUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SetTaxRateUseCase for SetTaxRateUseCaseImpl {
    async fn execute(&self, params: SetTaxRateParams) -> Result<SalesTaxQuote, CheckoutError> {
        self.logger
            .info(&format!("Setting tax rate to {}", params.tax_rate));

        {
            let mut state = self.checkout.lock().await;
            state.tax_rate = params.tax_rate;
            state.reset();
        }

        self.calculate.execute().await
    }
}
