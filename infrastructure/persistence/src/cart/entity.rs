use serde::{Deserialize, Serialize};

use business::domain::cart::model::{Cart, CartLine};

use crate::product::entity::ProductEntity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineEntity {
    pub product: ProductEntity,
    pub quantity: u32,
}

impl CartLineEntity {
    pub fn into_domain(self) -> CartLine {
        CartLine {
            product: self.product.into_domain(),
            quantity: self.quantity,
        }
    }

    pub fn from_domain(line: &CartLine) -> Self {
        Self {
            product: ProductEntity::from_domain(&line.product),
            quantity: line.quantity,
        }
    }
}

pub fn cart_into_domain(entities: Vec<CartLineEntity>) -> Cart {
    Cart::from_repository(
        entities
            .into_iter()
            .map(CartLineEntity::into_domain)
            .collect(),
    )
}

pub fn cart_from_domain(cart: &Cart) -> Vec<CartLineEntity> {
    cart.lines().iter().map(CartLineEntity::from_domain).collect()
}
