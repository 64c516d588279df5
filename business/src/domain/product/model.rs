use rust_decimal::Decimal;

use super::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

/// Average customer rating of a product.
#[derive(Debug, Clone, PartialEq)]
pub struct Rating {
    /// Average score in `[0, 5]`.
    pub rate: f32,
    pub count: u32,
}

impl Rating {
    pub const MAX_RATE: f32 = 5.0;

    pub fn is_valid(&self) -> bool {
        (0.0..=Self::MAX_RATE).contains(&self.rate)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub description: String,
    pub image: String,
    pub category: Option<String>,
    pub featured: bool,
    pub rating: Option<Rating>,
    pub image_hint: Option<String>,
}

pub struct NewProductProps {
    pub id: ProductId,
    pub title: String,
    pub price: Decimal,
    pub description: String,
    pub image: String,
    pub category: Option<String>,
    pub featured: bool,
    pub rating: Option<Rating>,
    pub image_hint: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if props.title.trim().is_empty() {
            return Err(ProductError::TitleEmpty);
        }

        if props.price.is_sign_negative() && !props.price.is_zero() {
            return Err(ProductError::NegativePrice);
        }

        if let Some(rating) = &props.rating
            && !rating.is_valid()
        {
            return Err(ProductError::InvalidRating);
        }

        Ok(Self {
            id: props.id,
            title: props.title,
            price: props.price,
            description: props.description,
            image: props.image,
            category: props.category,
            featured: props.featured,
            rating: props.rating,
            image_hint: props.image_hint,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: ProductId,
        title: String,
        price: Decimal,
        description: String,
        image: String,
        category: Option<String>,
        featured: bool,
        rating: Option<Rating>,
        image_hint: Option<String>,
    ) -> Self {
        Self {
            id,
            title,
            price,
            description,
            image,
            category,
            featured,
            rating,
            image_hint,
        }
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category
            .as_deref()
            .is_some_and(|c| c.eq_ignore_ascii_case(category))
    }
}
