use std::sync::Arc;

use async_trait::async_trait;

use super::persist::persist;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::CartEvent;
use crate::domain::cart::model::CartOutcome;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::session::CartSession;
use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
use crate::domain::logger::Logger;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, params: ClearCartParams) -> Result<CartOutcome, CartError> {
        self.logger.info("Clearing cart");

        let mut state = self.session.lock().await;
        state.ensure_ready()?;
        if let Some(expected) = &params.expected
            && *expected != state.cart
        {
            self.logger
                .warn("Cart changed since it was read, not clearing");
            return Err(CartError::Modified);
        }
        state.cart.clear();

        let warning = persist(
            self.repository.as_ref(),
            &self.session,
            &state,
            self.logger.as_ref(),
        )
        .await;

        self.session.publish(CartEvent::Cleared);

        Ok(CartOutcome {
            cart: state.cart.clone(),
            warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::ProductId;
    use crate::test_support::{MockCartRepo, mock_logger, product};

    async fn session_with_items() -> Arc<CartSession> {
        let session = Arc::new(CartSession::new());
        {
            let mut state = session.lock().await;
            state.ready = true;
            state.cart.add(product("1", 1999), 2).unwrap();
            state.cart.add(product("5", 2500), 1).unwrap();
        }
        session
    }

    #[tokio::test]
    async fn should_empty_cart_and_persist_empty_slot() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_save()
            .withf(|cart| cart.is_empty())
            .times(1)
            .returning(|_| Ok(()));

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session_with_items().await,
            logger: mock_logger(),
        };

        let outcome = use_case.execute(ClearCartParams::default()).await.unwrap();

        assert_eq!(outcome.cart.item_count(), 0);
        assert!(outcome.warning.is_none());
    }

    #[tokio::test]
    async fn should_clear_in_memory_even_when_save_fails() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::Persistence));
        let session = session_with_items().await;
        let mut events = session.subscribe();

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session.clone(),
            logger: mock_logger(),
        };

        let outcome = use_case.execute(ClearCartParams::default()).await.unwrap();

        assert!(matches!(outcome.warning, Some(CartError::SaveFailed(_))));
        assert!(session.snapshot().await.is_empty());
        assert_eq!(events.recv().await.unwrap(), CartEvent::SaveFailed);
        assert_eq!(events.recv().await.unwrap(), CartEvent::Cleared);
    }

    #[tokio::test]
    async fn should_refuse_to_clear_modified_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_save().never();
        let session = session_with_items().await;
        let mut expected = session.snapshot().await;
        expected.remove(&ProductId::new("5"));

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session.clone(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ClearCartParams {
                expected: Some(expected),
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::Modified));
        assert_eq!(session.snapshot().await.item_count(), 3);
    }

    #[tokio::test]
    async fn should_clear_matching_snapshot() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_save().times(1).returning(|_| Ok(()));
        let session = session_with_items().await;
        let expected = session.snapshot().await;

        let use_case = ClearCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session.clone(),
            logger: mock_logger(),
        };

        use_case
            .execute(ClearCartParams {
                expected: Some(expected),
            })
            .await
            .unwrap();

        assert!(session.snapshot().await.is_empty());
    }
}
