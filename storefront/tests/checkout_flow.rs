//! End-to-end storefront flow: browse, customize, checkout, reorder.

use std::sync::Arc;
use std::time::Duration;

use shared::models::{CustomerDetails, OrderStatus, PaymentDetails, SelectedCustomization};
use storefront::cart::CartStore;
use storefront::notify::RecordingNotifier;
use storefront::orders::{Checkout, OrderHistory, reorder};
use storefront::storage::RedbStore;
use storefront::catalog;

fn oat_milk() -> SelectedCustomization {
    SelectedCustomization {
        option_id: "milk-type".into(),
        option_name: "Milk Type".into(),
        selected_value: "oat-milk".into(),
        selected_name: "Oat Milk".into(),
        price_change: Some(0.75),
    }
}

fn customer() -> CustomerDetails {
    CustomerDetails {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        phone: Some("(555) 123-4567".into()),
        address: Some("123 Main St, Anytown, USA".into()),
    }
}

fn payment() -> PaymentDetails {
    PaymentDetails {
        card_number: "4242424242424242".into(),
        expiry_date: "09/27".into(),
        cvv: "123".into(),
    }
}

#[tokio::test]
async fn full_session_checkout_and_reorder() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(RedbStore::open(dir.path().join("storefront.redb")).unwrap());
    let notifier = Arc::new(RecordingNotifier::new());

    let mut cart = CartStore::open(store.clone(), notifier.clone());
    let history = OrderHistory::new(store.clone());
    let checkout = Checkout::new(Duration::ZERO);

    // Browse and add: a customized latte twice (merges), plus a burrito
    let latte = catalog::find_item("coffee-1").unwrap();
    let burrito = catalog::find_item("food-2").unwrap();
    cart.add_to_cart(&latte, 1, Some(vec![oat_milk()])).unwrap();
    cart.add_to_cart(&latte, 1, Some(vec![oat_milk()])).unwrap();
    cart.add_to_cart(&burrito, 1, None).unwrap();

    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.total_items(), 3);
    // (4.50 + 0.75) * 2 + 9.00
    assert_eq!(cart.cart_total(), 19.50);

    // A new session over the same storage sees the same cart
    let rehydrated = CartStore::open(store.clone(), notifier.clone());
    assert_eq!(rehydrated.cart_total(), 19.50);
    drop(rehydrated);

    // Checkout
    let order = checkout
        .place_order(&mut cart, &history, customer(), &payment())
        .await
        .unwrap();
    assert_eq!(order.total_amount, 19.50);
    assert_eq!(order.status, OrderStatus::Confirmed);
    assert!(cart.is_empty());

    // The order is the most recent history entry and survives re-read
    let recent = history.recent();
    assert_eq!(recent[0].id, order.id);

    // Reorder everything from the placed order
    reorder(&recent[0], &mut cart).unwrap();
    assert_eq!(cart.items().len(), 2);
    assert_eq!(cart.cart_total(), 19.50);

    // The cart survives a process restart via the same database file
    drop(cart);
    let cart = CartStore::open(store, notifier);
    assert_eq!(cart.cart_total(), 19.50);
}
