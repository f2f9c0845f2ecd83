//! Checkout: converts the cart into an immutable order
//!
//! The simulated processing latency stands in for a real payment/inventory
//! round trip. It is injectable so tests run with zero delay while
//! production uses the configured value. No partial state is observable:
//! the order is written to history first and the cart cleared only after
//! that write succeeds.

use std::time::Duration;

use chrono::Utc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use shared::models::{
    CustomerDetails, Order, OrderStatus, PaymentDetails, ValidationError,
};

use crate::cart::{CartError, CartStore};
use crate::storage::StorageError;

use super::OrderHistory;

/// Checkout failure. Every variant leaves the cart and order history
/// unchanged.
#[derive(Debug, Error)]
pub enum CheckoutError {
    #[error("cart is empty")]
    EmptyCart,

    #[error(transparent)]
    InvalidDetails(#[from] ValidationError),

    #[error("failed to save order: {0}")]
    Storage(#[from] StorageError),
}

pub struct Checkout {
    processing_delay: Duration,
}

impl Checkout {
    pub fn new(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }

    /// Place an order from the current cart.
    ///
    /// Validates the customer and mock payment details, rejects an empty
    /// cart, awaits the simulated processing latency, then atomically (from
    /// the caller's view) appends the order to history and clears the cart.
    /// Callers must not submit a second checkout while one is in flight;
    /// discarding an unresolved future has no side effects since nothing
    /// mutates before resolution.
    pub async fn place_order(
        &self,
        cart: &mut CartStore,
        history: &OrderHistory,
        customer: CustomerDetails,
        payment: &PaymentDetails,
    ) -> Result<Order, CheckoutError> {
        customer.validate()?;
        payment.validate()?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        // Simulated payment/inventory round trip
        tokio::time::sleep(self.processing_delay).await;

        let order = Order {
            id: format!("order-{}", Uuid::new_v4().simple()),
            date: Utc::now(),
            items: cart.items().to_vec(),
            total_amount: cart.cart_total(),
            status: OrderStatus::Confirmed,
            customer_details: Some(customer),
        };

        // History write first; the cart is only cleared once the order is
        // durably recorded, keeping the operation all-or-nothing.
        history.prepend(&order)?;
        cart.clear_cart();

        info!(
            order_id = %order.id,
            total = order.total_amount,
            items = order.items.len(),
            "Order placed"
        );
        Ok(order)
    }
}

/// Re-add every line of a historical order to the cart.
///
/// Passes each line's original customizations and quantity through
/// unchanged; the historical snapshot's price is authoritative, the current
/// catalog is not consulted.
pub fn reorder(order: &Order, cart: &mut CartStore) -> Result<(), CartError> {
    for line in &order.items {
        cart.add_to_cart(&line.menu_item(), line.quantity, line.customizations.clone())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::notify::RecordingNotifier;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn customer() -> CustomerDetails {
        CustomerDetails {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: None,
            address: Some("123 Main St, Anytown".into()),
        }
    }

    fn payment() -> PaymentDetails {
        PaymentDetails {
            card_number: "4111111111111111".into(),
            expiry_date: "09/27".into(),
            cvv: "123".into(),
        }
    }

    fn setup() -> (CartStore, OrderHistory, Checkout) {
        let store = MemoryStore::new();
        let cart = CartStore::open(
            Arc::new(store.clone()),
            Arc::new(RecordingNotifier::new()),
        );
        let history = OrderHistory::new(Arc::new(store));
        (cart, history, Checkout::new(Duration::ZERO))
    }

    #[tokio::test]
    async fn place_order_snapshots_total_and_clears_cart() {
        let (mut cart, history, checkout) = setup();
        let latte = catalog::find_item("coffee-1").unwrap();
        cart.add_to_cart(&latte, 2, None).unwrap();
        let expected_total = cart.cart_total();

        let order = checkout
            .place_order(&mut cart, &history, customer(), &payment())
            .await
            .unwrap();

        assert_eq!(order.total_amount, expected_total);
        assert_eq!(order.status, OrderStatus::Confirmed);
        assert_eq!(order.items.len(), 1);
        assert!(cart.is_empty());

        let recent = history.recent();
        assert_eq!(recent[0].id, order.id);
    }

    #[tokio::test]
    async fn empty_cart_is_rejected_without_touching_history() {
        let (mut cart, history, checkout) = setup();
        let before = history.recent();

        let result = checkout
            .place_order(&mut cart, &history, customer(), &payment())
            .await;

        assert!(matches!(result, Err(CheckoutError::EmptyCart)));
        let after = history.recent();
        assert_eq!(
            before.iter().map(|o| o.id.as_str()).collect::<Vec<_>>(),
            after.iter().map(|o| o.id.as_str()).collect::<Vec<_>>()
        );
    }

    #[tokio::test]
    async fn invalid_details_leave_cart_untouched() {
        let (mut cart, history, checkout) = setup();
        let latte = catalog::find_item("coffee-1").unwrap();
        cart.add_to_cart(&latte, 1, None).unwrap();

        let mut bad_customer = customer();
        bad_customer.email = "nope".into();
        let result = checkout
            .place_order(&mut cart, &history, bad_customer, &payment())
            .await;
        assert!(matches!(result, Err(CheckoutError::InvalidDetails(_))));
        assert_eq!(cart.total_items(), 1);

        let mut bad_payment = payment();
        bad_payment.cvv = "1".into();
        let result = checkout
            .place_order(&mut cart, &history, customer(), &bad_payment)
            .await;
        assert!(matches!(result, Err(CheckoutError::InvalidDetails(_))));
        assert_eq!(cart.total_items(), 1);
    }

    #[tokio::test]
    async fn consecutive_orders_stack_most_recent_first() {
        let (mut cart, history, checkout) = setup();
        let latte = catalog::find_item("coffee-1").unwrap();
        let toast = catalog::find_item("food-1").unwrap();

        cart.add_to_cart(&latte, 1, None).unwrap();
        let first = checkout
            .place_order(&mut cart, &history, customer(), &payment())
            .await
            .unwrap();

        cart.add_to_cart(&toast, 1, None).unwrap();
        let second = checkout
            .place_order(&mut cart, &history, customer(), &payment())
            .await
            .unwrap();

        let recent = history.recent();
        assert_eq!(recent[0].id, second.id);
        assert_eq!(recent[1].id, first.id);
    }

    #[test]
    fn reorder_reuses_historical_prices_and_customizations() {
        let store = MemoryStore::new();
        let mut cart = CartStore::open(
            Arc::new(store),
            Arc::new(RecordingNotifier::new()),
        );

        // Seed order-456: 2x latte at the historical price with oat milk
        let seeded = catalog::seed_order_history();
        let order = seeded.iter().find(|o| o.id == "order-456").unwrap();
        reorder(order, &mut cart).unwrap();

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.items()[0].price, 4.50);
        assert_eq!(cart.cart_total(), 10.50);

        // Reordering again merges into the same lines
        reorder(order, &mut cart).unwrap();
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 4);
    }
}
