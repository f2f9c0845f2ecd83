//! Persisted order history
//!
//! Orders are prepended on placement, so the persisted list is naturally
//! most-recent-first. Until the user places a real order the display path
//! falls back to the seeded default history, which is why `recent()`
//! re-sorts by date instead of trusting list order.

use std::sync::Arc;

use tracing::warn;

use shared::models::Order;

use crate::catalog;
use crate::storage::{KeyValue, StorageResult};

/// Persisted-state key for the serialized order list
const ORDER_HISTORY_KEY: &str = "order_history";

pub struct OrderHistory {
    store: Arc<dyn KeyValue>,
}

impl OrderHistory {
    pub fn new(store: Arc<dyn KeyValue>) -> Self {
        Self { store }
    }

    /// All orders for display, sorted by date descending.
    ///
    /// Falls back to the seeded default history when nothing has been
    /// persisted (or the persisted value is unreadable); the read path never
    /// surfaces a storage error.
    pub fn recent(&self) -> Vec<Order> {
        let mut orders = match self.store.get(ORDER_HISTORY_KEY) {
            Ok(Some(raw)) => match serde_json::from_slice::<Vec<Order>>(&raw) {
                Ok(orders) => orders,
                Err(e) => {
                    warn!(error = %e, "Persisted order history is unreadable, falling back to seed data");
                    catalog::seed_order_history()
                }
            },
            Ok(None) => catalog::seed_order_history(),
            Err(e) => {
                warn!(error = %e, "Failed to read order history, falling back to seed data");
                catalog::seed_order_history()
            }
        };
        orders.sort_by(|a, b| b.date.cmp(&a.date));
        orders
    }

    /// Prepend a new order to the persisted list.
    ///
    /// Unlike the read path, a write failure is returned so checkout can
    /// stay all-or-nothing. Only previously persisted orders are carried
    /// forward; the seeded defaults are display-only.
    pub(crate) fn prepend(&self, order: &Order) -> StorageResult<()> {
        let mut orders = match self.store.get(ORDER_HISTORY_KEY)? {
            Some(raw) => serde_json::from_slice::<Vec<Order>>(&raw).unwrap_or_else(|e| {
                warn!(error = %e, "Persisted order history is unreadable, starting a fresh list");
                Vec::new()
            }),
            None => Vec::new(),
        };
        orders.insert(0, order.clone());
        let raw = serde_json::to_vec(&orders)?;
        self.store.set(ORDER_HISTORY_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use chrono::Utc;
    use shared::models::OrderStatus;

    fn order(id: &str, minutes_ago: i64) -> Order {
        Order {
            id: id.into(),
            date: Utc::now() - chrono::Duration::minutes(minutes_ago),
            items: vec![],
            total_amount: 0.0,
            status: OrderStatus::Confirmed,
            customer_details: None,
        }
    }

    #[test]
    fn empty_storage_falls_back_to_seed_history() {
        let history = OrderHistory::new(Arc::new(MemoryStore::new()));
        let orders = history.recent();
        assert_eq!(orders.len(), 2);
        // Seeded orders come back date-descending
        assert!(orders[0].date >= orders[1].date);
    }

    #[test]
    fn corrupt_storage_falls_back_to_seed_history() {
        let store = MemoryStore::new();
        store.set(ORDER_HISTORY_KEY, b"broken").unwrap();
        let history = OrderHistory::new(Arc::new(store));
        assert_eq!(history.recent().len(), 2);
    }

    #[test]
    fn prepend_puts_newest_first_and_replaces_seed() {
        let store = MemoryStore::new();
        let history = OrderHistory::new(Arc::new(store));

        history.prepend(&order("order-a", 10)).unwrap();
        history.prepend(&order("order-b", 0)).unwrap();

        let orders = history.recent();
        // Once anything is persisted the seeds no longer show
        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].id, "order-b");
        assert_eq!(orders[1].id, "order-a");
    }

    #[test]
    fn recent_resorts_out_of_order_persisted_entries() {
        let store = MemoryStore::new();
        let history = OrderHistory::new(Arc::new(store));

        // Prepending an older order leaves the persisted list unsorted
        history.prepend(&order("order-new", 0)).unwrap();
        history.prepend(&order("order-old", 60)).unwrap();

        let orders = history.recent();
        assert_eq!(orders[0].id, "order-new");
        assert_eq!(orders[1].id, "order-old");
    }
}
