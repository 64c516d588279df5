use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::{Mutex, MutexGuard};

use super::model::CheckoutState;
use crate::domain::tax::model::TaxRate;

/// Owned checkout state container shared by the checkout use cases.
pub struct CheckoutSession {
    state: Mutex<CheckoutState>,
    placing_order: AtomicBool,
}

/// Marks an order placement in progress; released when dropped.
pub struct OrderPlacement<'a> {
    flag: &'a AtomicBool,
}

impl Drop for OrderPlacement<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl CheckoutSession {
    pub fn new(tax_rate: TaxRate) -> Self {
        Self {
            state: Mutex::new(CheckoutState::new(tax_rate)),
            placing_order: AtomicBool::new(false),
        }
    }

    pub async fn lock(&self) -> MutexGuard<'_, CheckoutState> {
        self.state.lock().await
    }

    pub async fn tax_rate(&self) -> TaxRate {
        self.state.lock().await.tax_rate
    }

    /// Returns `None` while another placement holds the flag.
    pub fn begin_order(&self) -> Option<OrderPlacement<'_>> {
        self.placing_order
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| OrderPlacement {
                flag: &self.placing_order,
            })
    }

    pub fn is_placing_order(&self) -> bool {
        self.placing_order.load(Ordering::Acquire)
    }
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new(TaxRate::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_allow_one_placement_at_a_time() {
        let session = CheckoutSession::default();

        let first = session.begin_order();

        assert!(first.is_some());
        assert!(session.begin_order().is_none());
        assert!(session.is_placing_order());
    }

    #[test]
    fn should_release_placement_when_dropped() {
        let session = CheckoutSession::default();

        drop(session.begin_order());

        assert!(!session.is_placing_order());
        assert!(session.begin_order().is_some());
    }
}
