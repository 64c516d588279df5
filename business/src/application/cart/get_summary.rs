use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::model::CartSummary;
use crate::domain::cart::session::CartSession;
use crate::domain::cart::use_cases::get_summary::GetCartSummaryUseCase;

pub struct GetCartSummaryUseCaseImpl {
    pub session: Arc<CartSession>,
}

#[async_trait]
impl GetCartSummaryUseCase for GetCartSummaryUseCaseImpl {
    async fn execute(&self) -> CartSummary {
        self.session.lock().await.cart.summary()
    }
}
