use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::product::model::{Product, Rating};
use business::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingEntity {
    pub rate: f32,
    pub count: u32,
}

/// Stored product shape, shared by catalog files and the cart slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntity {
    pub id: String,
    pub title: String,
    pub price: Decimal,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<RatingEntity>,
    #[serde(default, rename = "dataAiHint", skip_serializing_if = "Option::is_none")]
    pub image_hint: Option<String>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.title,
            self.price,
            self.description,
            self.image,
            self.category,
            self.featured.unwrap_or(false),
            self.rating.map(|r| Rating {
                rate: r.rate,
                count: r.count,
            }),
            self.image_hint,
        )
    }

    pub fn from_domain(product: &Product) -> Self {
        Self {
            id: product.id.as_str().to_string(),
            title: product.title.clone(),
            price: product.price,
            description: product.description.clone(),
            image: product.image.clone(),
            category: product.category.clone(),
            featured: Some(product.featured),
            rating: product.rating.as_ref().map(|r| RatingEntity {
                rate: r.rate,
                count: r.count,
            }),
            image_hint: product.image_hint.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_catalog_record_with_numeric_price() {
        let json = r#"{
            "id": "2",
            "title": "Wireless Headphones",
            "price": 79.99,
            "description": "Noise-cancelling",
            "image": "https://placehold.co/600x400.png",
            "category": "Electronics",
            "featured": true,
            "rating": { "rate": 4.8, "count": 250 },
            "dataAiHint": "headphones electronics"
        }"#;

        let product = serde_json::from_str::<ProductEntity>(json)
            .unwrap()
            .into_domain();

        assert_eq!(product.price, Decimal::new(7999, 2));
        assert!(product.featured);
        assert_eq!(product.rating.unwrap().count, 250);
        assert_eq!(product.image_hint.as_deref(), Some("headphones electronics"));
    }

    #[test]
    fn should_default_optional_fields() {
        let json = r#"{ "id": "9", "title": "Mug", "price": "12.00" }"#;

        let product = serde_json::from_str::<ProductEntity>(json)
            .unwrap()
            .into_domain();

        assert!(!product.featured);
        assert!(product.category.is_none());
        assert!(product.rating.is_none());
    }
}
