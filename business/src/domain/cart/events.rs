use crate::domain::shared::value_objects::ProductId;

/// Change notifications published by the cart session.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    Restored { item_count: u64 },
    ItemAdded { product_id: ProductId, title: String, quantity: u32 },
    ItemRemoved { product_id: ProductId },
    /// A quantity of 0 means the line was removed.
    QuantityUpdated { product_id: ProductId, quantity: u32 },
    Cleared,
    LoadFailed,
    SaveFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

impl std::fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NoticeLevel::Info => write!(f, "info"),
            NoticeLevel::Error => write!(f, "error"),
        }
    }
}

/// User-facing acknowledgment of a cart event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub level: NoticeLevel,
}

impl Notice {
    fn info(title: &str, description: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            description: description.into(),
            level: NoticeLevel::Info,
        }
    }

    fn error(description: &str) -> Self {
        Self {
            title: "Error".to_string(),
            description: description.to_string(),
            level: NoticeLevel::Error,
        }
    }
}

impl CartEvent {
    /// Quantity updates and restores are refresh signals only.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            CartEvent::ItemAdded { title, .. } => Some(Notice::info(
                "Added to Cart",
                format!("{} has been added to your cart.", title),
            )),
            CartEvent::ItemRemoved { .. } => {
                Some(Notice::info("Item Removed", "Item removed from your cart."))
            }
            CartEvent::Cleared => Some(Notice::info("Cart Cleared", "Your cart has been emptied.")),
            CartEvent::LoadFailed => Some(Notice::error(
                "Could not load cart items. Please try refreshing.",
            )),
            CartEvent::SaveFailed => Some(Notice::error(
                "Could not save cart changes. Your cart might not persist.",
            )),
            CartEvent::Restored { .. } | CartEvent::QuantityUpdated { .. } => None,
        }
    }

    /// Whether the event changed the cart contents.
    pub fn changes_contents(&self) -> bool {
        matches!(
            self,
            CartEvent::Restored { .. }
                | CartEvent::ItemAdded { .. }
                | CartEvent::ItemRemoved { .. }
                | CartEvent::QuantityUpdated { .. }
                | CartEvent::Cleared
        )
    }
}
