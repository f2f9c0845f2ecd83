//! Daily Brew storefront engine
//!
//! The logic behind the cafe storefront UI: the session cart with its
//! customization-identity rules, decimal-precise pricing, mocked checkout
//! with persisted order history, and the smoothie suggestion contract.
//! Presentation (pages, forms, toasts) lives elsewhere; this crate exposes
//! the operations those surfaces call.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod notify;
pub mod orders;
pub mod storage;
pub mod suggestion;

// Re-exports
pub use cart::CartStore;
pub use config::Config;
pub use notify::{LogNotifier, Notice, Notifier};
pub use orders::{Checkout, CheckoutError, OrderHistory};
pub use storage::{KeyValue, MemoryStore, RedbStore, StorageError};
pub use suggestion::{SuggestionClient, SuggestionError, TextGenerator};
