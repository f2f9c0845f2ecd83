//! Cart store
//!
//! Session cart keyed by (item id, customization signature): adding the same
//! item with the same customization set increments the existing line, a
//! different set creates a distinct line. The full cart is persisted after
//! every mutation and rehydrated at construction; a corrupt or missing
//! persisted value falls back to an empty cart.

pub mod money;
pub mod signature;

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, warn};

use shared::models::{CartLineItem, MenuItem, SelectedCustomization};

use crate::notify::{Notice, Notifier};
use crate::storage::KeyValue;
use signature::{DEFAULT_SIGNATURE, customization_signature};

/// Persisted-state key for the serialized cart
const CART_KEY: &str = "cart";

/// Cart operation failure (input validation only; persistence failures are
/// logged, not surfaced, since the in-memory cart stays authoritative)
#[derive(Debug, Error)]
pub enum CartError {
    #[error("invalid cart item: {0}")]
    InvalidItem(String),
}

/// The session shopping cart
pub struct CartStore {
    items: Vec<CartLineItem>,
    store: Arc<dyn KeyValue>,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    /// Hydrate the cart from persisted state.
    ///
    /// An unreadable persisted value is logged and discarded; hydration
    /// never surfaces an error to the user.
    pub fn open(store: Arc<dyn KeyValue>, notifier: Arc<dyn Notifier>) -> Self {
        let items = match store.get(CART_KEY) {
            Ok(Some(raw)) => match serde_json::from_slice::<Vec<CartLineItem>>(&raw) {
                Ok(items) => items,
                Err(e) => {
                    warn!(error = %e, "Persisted cart is unreadable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Failed to read persisted cart, starting empty");
                Vec::new()
            }
        };
        debug!(lines = items.len(), "Cart hydrated");
        Self {
            items,
            store,
            notifier,
        }
    }

    /// Add `quantity` of an item with the given customization set.
    ///
    /// Merges into an existing line when (item id, signature) matches,
    /// otherwise appends a new line. Quantity may be any positive integer
    /// (bulk re-adds such as reordering pass quantities > 1).
    pub fn add_to_cart(
        &mut self,
        item: &MenuItem,
        quantity: u32,
        customizations: Option<Vec<SelectedCustomization>>,
    ) -> Result<(), CartError> {
        money::validate_line(item.price, quantity, customizations.as_deref())?;

        let sig = customization_signature(customizations.as_deref());
        let description = customizations
            .as_ref()
            .filter(|c| !c.is_empty())
            .map(|c| {
                format!(
                    "Customizations: {}",
                    c.iter()
                        .map(|s| s.selected_name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            });

        match self.position(&item.id, &sig) {
            Some(idx) => self.items[idx].quantity += quantity,
            None => self
                .items
                .push(CartLineItem::new(item, quantity, customizations)),
        }
        self.persist();

        self.notifier.notify(Notice {
            title: format!("{} added to cart!", item.name),
            description,
        });
        Ok(())
    }

    /// Remove the line matching (item id, signature). Safe no-op when absent.
    pub fn remove_from_cart(&mut self, item_id: &str, sig: Option<&str>) {
        let sig = sig.unwrap_or(DEFAULT_SIGNATURE);
        if let Some(idx) = self.position(item_id, sig) {
            let removed = self.items.remove(idx);
            self.persist();
            self.notifier
                .notify(Notice::new(format!("{} removed from cart.", removed.name)));
        }
    }

    /// Set the quantity on the matching line.
    ///
    /// Values clamp to the same bounds `add_to_cart` enforces: negatives to
    /// zero (a resulting quantity of zero removes the line entirely) and
    /// excessive values to the per-line maximum.
    pub fn update_quantity(&mut self, item_id: &str, quantity: i32, sig: Option<&str>) {
        let sig = sig.unwrap_or(DEFAULT_SIGNATURE);
        let quantity = quantity.clamp(0, money::MAX_QUANTITY as i32) as u32;
        if let Some(idx) = self.position(item_id, sig) {
            if quantity == 0 {
                self.items.remove(idx);
            } else {
                self.items[idx].quantity = quantity;
            }
            self.persist();
        }
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.items.clear();
        self.persist();
        self.notifier.notify(Notice::new("Cart cleared!"));
    }

    /// Read-only view of the cart lines, in insertion order.
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cart total across all lines, rounded for display.
    pub fn cart_total(&self) -> f64 {
        money::to_f64(money::cart_total(&self.items))
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u32 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Subtotal for one line, rounded for display.
    pub fn item_subtotal(&self, line: &CartLineItem) -> f64 {
        money::to_f64(money::item_subtotal(line))
    }

    fn position(&self, item_id: &str, sig: &str) -> Option<usize> {
        self.items.iter().position(|l| {
            l.id == item_id && customization_signature(l.customizations.as_deref()) == sig
        })
    }

    /// Serialize the full cart to the persistence port.
    ///
    /// A write failure leaves the in-memory cart as the source of truth.
    fn persist(&self) {
        let raw = match serde_json::to_vec(&self.items) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Failed to serialize cart");
                return;
            }
        };
        if let Err(e) = self.store.set(CART_KEY, &raw) {
            warn!(error = %e, "Failed to persist cart, in-memory state remains authoritative");
        }
    }
}
