use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        self.logger.info("Fetching all products");

        let products = self.repository.get_all().await?;

        let products = match params.category {
            Some(category) => products
                .into_iter()
                .filter(|p| p.in_category(&category))
                .collect(),
            None => products,
        };

        self.logger
            .debug(&format!("Fetched {} products", products.len()));
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockProductRepo, mock_logger, product};

    fn categorized(id: &str, category: &str) -> Product {
        let mut p = product(id, 1000);
        p.category = Some(category.to_string());
        p
    }

    #[tokio::test]
    async fn should_return_all_products_without_filter() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Ok(vec![product("1", 1999), product("2", 7999)]));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetAllProductsParams::default()).await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_filter_by_category() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                categorized("1", "Apparel"),
                categorized("2", "Electronics"),
                categorized("6", "Electronics"),
            ])
        });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams {
                category: Some("electronics".to_string()),
            })
            .await
            .unwrap();

        let ids: Vec<&str> = result.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "6"]);
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(RepositoryError::Persistence));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetAllProductsParams::default()).await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
