use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;
use rust_decimal::Decimal;

use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::shared::value_objects::ProductId;
use crate::domain::tax::errors::TaxError;
use crate::domain::tax::model::{SalesTaxQuote, SalesTaxRequest};
use crate::domain::tax::services::SalesTaxCalculator;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError>;
        async fn get_featured(&self) -> Result<Vec<Product>, RepositoryError>;
    }
}

mock! {
    pub CartRepo {}

    #[async_trait]
    impl CartRepository for CartRepo {
        async fn load(&self) -> Result<Option<Cart>, RepositoryError>;
        async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub TaxCalculator {}

    #[async_trait]
    impl SalesTaxCalculator for TaxCalculator {
        async fn calculate(&self, request: SalesTaxRequest) -> Result<SalesTaxQuote, TaxError>;
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// Catalog product with the given id and a price in cents.
pub fn product(id: &str, price_cents: i64) -> Product {
    Product::from_repository(
        ProductId::new(id),
        format!("Product {}", id),
        Decimal::new(price_cents, 2),
        "Test product".to_string(),
        "https://placehold.co/600x400.png".to_string(),
        None,
        false,
        None,
        None,
    )
}
