use std::sync::Arc;

use async_trait::async_trait;

use super::persist::persist;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::events::CartEvent;
use crate::domain::cart::model::CartOutcome;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::session::CartSession;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub session: Arc<CartSession>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<CartOutcome, CartError> {
        self.logger
            .info(&format!("Removing {} from cart", params.product_id));

        let mut state = self.session.lock().await;
        state.ensure_ready()?;
        if !state.cart.remove(&params.product_id) {
            self.logger.debug(&format!(
                "Product {} not in cart, nothing removed",
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

        self.session.publish(CartEvent::ItemRemoved {
            product_id: params.product_id,
        });

        Ok(CartOutcome {
            cart: state.cart.clone(),
            warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::ProductId;
    use crate::test_support::{MockCartRepo, mock_logger, product};

    async fn session_with_items() -> Arc<CartSession> {
        let session = Arc::new(CartSession::new());
        {
            let mut state = session.lock().await;
            state.ready = true;
            state.cart.add(product("1", 1999), 2).unwrap();
            state.cart.add(product("2", 500), 1).unwrap();
        }
        session
    }

    #[tokio::test]
    async fn should_remove_matching_line() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_save()
            .withf(|cart| cart.lines().len() == 1)
            .returning(|_| Ok(()));

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            session: session_with_items().await,
            logger: mock_logger(),
        };

        let outcome = use_case
            .execute(RemoveCartItemParams {
                product_id: ProductId::new("1"),
            })
            .await
            .unwrap();

        assert!(outcome.cart.find(&ProductId::new("1")).is_none());
        assert_eq!(outcome.cart.item_count(), 1);
    }

    #[tokio::test]
    async fn should_leave_cart_unchanged_for_unknown_product() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));
        let session = session_with_items().await;
        let before = session.snapshot().await;

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            session,
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveCartItemParams {
                product_id: ProductId::new("missing"),
            })
            .await;

        assert!(result.is_ok());
        assert_eq!(result.unwrap().cart, before);
    }

    #[tokio::test]
    async fn should_publish_removed_event() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_save().returning(|_| Ok(()));
        let session = session_with_items().await;
        let mut events = session.subscribe();

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            session,
            logger: mock_logger(),
        };

        use_case
            .execute(RemoveCartItemParams {
                product_id: ProductId::new("2"),
            })
            .await
            .unwrap();

        assert_eq!(
            events.recv().await.unwrap(),
            CartEvent::ItemRemoved {
                product_id: ProductId::new("2")
            }
        );
    }
}
