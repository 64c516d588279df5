use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::domain::tax::model::{SalesTaxQuote, TaxRate};

/// Where the checkout's tax figure stands.
#[derive(Debug, Clone, PartialEq)]
pub enum QuoteState {
    Idle,
    Pending { generation: u64 },
    Ready {
        generation: u64,
        subtotal: Decimal,
        quote: SalesTaxQuote,
    },
    Failed { generation: u64 },
}

/// Checkout state: the chosen rate and the latest tax quote.
///
/// Every calculation takes a new generation; only the newest generation
/// may store its result.
#[derive(Debug)]
pub struct CheckoutState {
    pub tax_rate: TaxRate,
    pub last_order: Option<OrderConfirmation>,
    generation: u64,
    quote: QuoteState,
}

impl CheckoutState {
    pub fn new(tax_rate: TaxRate) -> Self {
        Self {
            tax_rate,
            last_order: None,
            generation: 0,
            quote: QuoteState::Idle,
        }
    }

    pub fn quote(&self) -> &QuoteState {
        &self.quote
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_calculating(&self) -> bool {
        matches!(self.quote, QuoteState::Pending { .. })
    }

    /// Invalidates any previous quote and returns the new generation.
    pub fn begin_calculation(&mut self) -> u64 {
        self.generation += 1;
        self.quote = QuoteState::Pending {
            generation: self.generation,
        };
        self.generation
    }

    /// Drops the current quote; in-flight results become stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.quote = QuoteState::Idle;
    }

    /// Stores a result if `generation` is still current.
    pub fn complete(&mut self, generation: u64, subtotal: Decimal, quote: SalesTaxQuote) -> bool {
        if generation != self.generation {
            return false;
        }
        self.quote = QuoteState::Ready {
            generation,
            subtotal,
            quote,
        };
        true
    }

    /// Records a failure if `generation` is still current.
    pub fn fail(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.quote = QuoteState::Failed { generation };
        true
    }

    /// The quote, if it was computed for exactly this subtotal.
    pub fn quote_for(&self, subtotal: Decimal) -> Option<SalesTaxQuote> {
        match &self.quote {
            QuoteState::Ready {
                subtotal: quoted,
                quote,
                ..
            } if *quoted == subtotal => Some(*quote),
            _ => None,
        }
    }
}

impl Default for CheckoutState {
    fn default() -> Self {
        Self::new(TaxRate::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderConfirmation {
    pub id: Uuid,
    pub placed_at: DateTime<Utc>,
    pub item_count: u64,
    pub subtotal: Decimal,
    pub sales_tax: Decimal,
    pub total: Decimal,
}

impl OrderConfirmation {
    pub fn new(item_count: u64, subtotal: Decimal, quote: SalesTaxQuote) -> Self {
        Self {
            id: Uuid::new_v4(),
            placed_at: Utc::now(),
            item_count,
            subtotal,
            sales_tax: quote.sales_tax,
            total: quote.total,
        }
    }
}
