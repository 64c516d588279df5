use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::CartEvent;
use crate::domain::cart::model::{Cart, CartOutcome};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::session::CartSession;
use crate::domain::cart::use_cases::restore::RestoreCartUseCase;
use crate::domain::logger::Logger;

pub struct RestoreCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RestoreCartUseCase for RestoreCartUseCaseImpl {
    async fn execute(&self) -> Result<CartOutcome, CartError> {
        let mut state = self.session.lock().await;
        if state.ready {
            self.logger.debug("Cart already restored");
            return Ok(CartOutcome {
                cart: state.cart.clone(),
                warning: None,
            });
        }

        self.logger.info("Restoring cart from storage");

        let (restored, warning) = match self.repository.load().await {
            Ok(Some(cart)) => (cart, None),
            Ok(None) => (Cart::new(), None),
            Err(err) => {
                self.logger
                    .warn(&format!("Could not load cart, starting empty: {}", err));
                self.session.publish(CartEvent::LoadFailed);
                (Cart::new(), Some(CartError::LoadFailed(err)))
            }
        };

        state.cart = restored;
        state.ready = true;

        let item_count = state.cart.item_count();
        self.logger
            .info(&format!("Cart restored with {} items", item_count));
        self.session.publish(CartEvent::Restored { item_count });

        Ok(CartOutcome {
            cart: state.cart.clone(),
            warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::cart::clear::ClearCartUseCaseImpl;
    use crate::domain::cart::use_cases::clear::{ClearCartParams, ClearCartUseCase};
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockCartRepo, mock_logger, product};

    fn stored_cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(product("1", 1999), 2).unwrap();
        cart
    }

    #[tokio::test]
    async fn should_restore_stored_cart() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(Some(stored_cart())));
        let session = Arc::new(CartSession::new());

        let use_case = RestoreCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session.clone(),
            logger: mock_logger(),
        };

        let outcome = use_case.execute().await.unwrap();

        assert!(outcome.warning.is_none());
        assert_eq!(outcome.cart.item_count(), 2);
        assert!(session.is_ready().await);
    }

    #[tokio::test]
    async fn should_start_empty_when_slot_missing() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_load().returning(|| Ok(None));

        let use_case = RestoreCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: Arc::new(CartSession::new()),
            logger: mock_logger(),
        };

        let outcome = use_case.execute().await.unwrap();

        assert!(outcome.warning.is_none());
        assert!(outcome.cart.is_empty());
    }

    #[tokio::test]
    async fn should_fall_back_to_empty_when_slot_corrupted() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Err(RepositoryError::Corrupted));
        mock_repo.expect_save().never();
        let session = Arc::new(CartSession::new());
        let mut events = session.subscribe();

        let use_case = RestoreCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session.clone(),
            logger: mock_logger(),
        };

        let outcome = use_case.execute().await.unwrap();

        assert!(outcome.cart.is_empty());
        assert!(matches!(
            outcome.warning,
            Some(CartError::LoadFailed(RepositoryError::Corrupted))
        ));
        assert!(session.is_ready().await);
        assert_eq!(events.recv().await.unwrap(), CartEvent::LoadFailed);
    }

    #[tokio::test]
    async fn should_keep_stored_cart_when_cleared_before_restore() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_load()
            .returning(|| Ok(Some(stored_cart())));
        mock_repo.expect_save().never();
        let repository: Arc<dyn CartRepository> = Arc::new(mock_repo);
        let session = Arc::new(CartSession::new());

        let clear = ClearCartUseCaseImpl {
            repository: repository.clone(),
            session: session.clone(),
            logger: mock_logger(),
        };
        let restore = RestoreCartUseCaseImpl {
            repository,
            session: session.clone(),
            logger: mock_logger(),
        };

        let cleared = clear.execute(ClearCartParams::default()).await;
        let outcome = restore.execute().await.unwrap();

        assert!(matches!(cleared.unwrap_err(), CartError::NotReady));
        assert_eq!(outcome.cart.item_count(), 2);
        assert_eq!(session.snapshot().await.item_count(), 2);
    }

    #[tokio::test]
    async fn should_not_reload_once_ready() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_load()
            .times(1)
            .returning(|| Ok(Some(stored_cart())));

        let use_case = RestoreCartUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: Arc::new(CartSession::new()),
            logger: mock_logger(),
        };

        use_case.execute().await.unwrap();
        let outcome = use_case.execute().await.unwrap();

        assert_eq!(outcome.cart.item_count(), 2);
    }
}
