use rust_decimal::Decimal;

use super::errors::CartError;
use crate::domain::product::model::Product;
use crate::domain::shared::money::round_currency;
use crate::domain::shared::value_objects::ProductId;

/// One product and how many units of it are in the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    pub fn product_id(&self) -> &ProductId {
        &self.product.id
    }

    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Ordered cart lines, at most one per product id, every quantity >= 1.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

/// Read-only view of the cart with its derived aggregates.
#[derive(Debug, Clone, PartialEq)]
pub struct CartSummary {
    pub lines: Vec<CartLine>,
    pub subtotal: Decimal,
    pub item_count: u64,
}

/// Result of a cart operation. The in-memory change always applies;
/// `warning` carries a storage failure the caller should surface.
#[derive(Debug)]
pub struct CartOutcome {
    pub cart: Cart,
    pub warning: Option<CartError>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Constructor for data already persisted in the repository.
    /// Duplicate ids are merged and empty lines dropped.
    pub fn from_repository(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.quantity > 0 {
                cart.merge_line(line.product, line.quantity);
            }
        }
        cart
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id() == product_id)
    }

    /// Adds `quantity` units of `product`, merging into an existing line.
    pub fn add(&mut self, product: Product, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        self.merge_line(product, quantity);
        Ok(())
    }

    /// Returns whether a line was removed.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id() != product_id);
        self.lines.len() != before
    }

    /// Sets the exact quantity of an existing line; `<= 0` removes it.
    /// Returns whether a line matched.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> Result<bool, CartError> {
        if quantity <= 0 {
            return Ok(self.remove(product_id));
        }
        let quantity = u32::try_from(quantity).map_err(|_| CartError::InvalidQuantity)?;

        match self.lines.iter_mut().find(|l| l.product_id() == product_id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn subtotal(&self) -> Decimal {
        round_currency(self.lines.iter().map(CartLine::line_total).sum())
    }

    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.lines.clone(),
            subtotal: self.subtotal(),
            item_count: self.item_count(),
        }
    }

    fn merge_line(&mut self, product: Product, quantity: u32) {
        match self.lines.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(quantity),
            None => self.lines.push(CartLine { product, quantity }),
        }
    }
}
