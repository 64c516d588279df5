use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use business::domain::errors::RepositoryError;
use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProductProps, Product, Rating};
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::ProductId;

use super::entity::ProductEntity;
use super::seed::demo_products;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog.read_failed")]
    Io(#[from] std::io::Error),
    #[error("catalog.invalid_json")]
    InvalidJson(#[from] serde_json::Error),
    #[error("catalog.invalid_product: {id}")]
    InvalidProduct {
        id: String,
        #[source]
        source: ProductError,
    },
    #[error("catalog.duplicate_id: {0}")]
    DuplicateId(String),
}

/// Read-only product list held in memory.
pub struct StaticProductCatalog {
    products: Vec<Product>,
}

impl StaticProductCatalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn seeded() -> Self {
        Self::new(demo_products())
    }

    /// Parses a JSON array of products, validating each record.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let entities = serde_json::from_str::<Vec<ProductEntity>>(raw)?;

        let mut products: Vec<Product> = Vec::with_capacity(entities.len());
        for entity in entities {
            if products.iter().any(|p| p.id.as_str() == entity.id) {
                return Err(CatalogError::DuplicateId(entity.id));
            }
            let id = entity.id.clone();
            let product = Product::new(NewProductProps {
                id: ProductId::new(entity.id),
                title: entity.title,
                price: entity.price,
                description: entity.description,
                image: entity.image,
                category: entity.category,
                featured: entity.featured.unwrap_or(false),
                rating: entity.rating.map(|r| Rating {
                    rate: r.rate,
                    count: r.count,
                }),
                image_hint: entity.image_hint,
            })
            .map_err(|source| CatalogError::InvalidProduct { id, source })?;
            products.push(product);
        }

        Ok(Self::new(products))
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path.as_ref()).await?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            products = catalog.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl ProductRepository for StaticProductCatalog {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, id: &ProductId) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_featured(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.featured)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;

    #[tokio::test]
    async fn should_seed_eight_demo_products() {
        let catalog = StaticProductCatalog::seeded();

        let products = catalog.get_all().await.unwrap();

        assert_eq!(products.len(), 8);
        assert_eq!(products[0].title, "Classic T-Shirt");
        assert_eq!(products[0].price, Decimal::new(1999, 2));
        assert_eq!(products[2].price, Decimal::new(4950, 2));
    }

    #[tokio::test]
    async fn should_return_only_featured_products() {
        let catalog = StaticProductCatalog::seeded();

        let featured = catalog.get_featured().await.unwrap();

        let ids: Vec<&str> = featured.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "5", "8"]);
    }

    #[tokio::test]
    async fn should_find_product_by_id() {
        let catalog = StaticProductCatalog::seeded();

        let product = catalog.get_by_id(&ProductId::new("6")).await.unwrap();

        assert_eq!(product.title, "Smart Watch");
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let catalog = StaticProductCatalog::seeded();

        let result = catalog.get_by_id(&ProductId::new("999")).await;

        assert_eq!(result.unwrap_err(), RepositoryError::NotFound);
    }

    #[test]
    fn should_reject_duplicate_ids() {
        let raw = r#"[
            { "id": "1", "title": "A", "price": 1.00 },
            { "id": "1", "title": "B", "price": 2.00 }
        ]"#;

        let result = StaticProductCatalog::from_json_str(raw);

        assert!(matches!(result, Err(CatalogError::DuplicateId(id)) if id == "1"));
    }

    #[test]
    fn should_reject_invalid_product() {
        let raw = r#"[{ "id": "1", "title": "A", "price": -1.00 }]"#;

        let result = StaticProductCatalog::from_json_str(raw);

        assert!(matches!(
            result,
            Err(CatalogError::InvalidProduct {
                source: ProductError::NegativePrice,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn should_load_catalog_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{ "id": "a", "title": "Mug", "price": 12.5, "featured": true }}]"#
        )
        .unwrap();

        let catalog = StaticProductCatalog::from_json_file(file.path())
            .await
            .unwrap();

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get_featured().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_fail_on_missing_catalog_file() {
        let dir = tempfile::tempdir().unwrap();

        let result = StaticProductCatalog::from_json_file(dir.path().join("missing.json")).await;

        assert!(matches!(result, Err(CatalogError::Io(_))));
    }
}
