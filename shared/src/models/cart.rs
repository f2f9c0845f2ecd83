//! Cart line models

use serde::{Deserialize, Serialize};

use super::menu::{Category, CustomizationOption, MenuItem};

/// A user's choice within one customization option group.
///
/// `price_change` is a copy taken at selection time; the cart never
/// re-derives it from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedCustomization {
    /// Id of the owning [`CustomizationOption`]
    pub option_id: String,
    pub option_name: String,
    /// Id of the chosen choice
    pub selected_value: String,
    /// Display name of the chosen choice
    pub selected_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change: Option<f64>,
}

/// One cart entry: a menu item snapshot plus quantity and customizations.
///
/// Identity within the cart is the pair (item id, customization signature);
/// the store guarantees at most one line per pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customizable_options: Option<Vec<CustomizationOption>>,
    /// Always positive; the store removes lines that would drop to zero
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customizations: Option<Vec<SelectedCustomization>>,
}

impl CartLineItem {
    /// Snapshot a catalog item into a cart line.
    pub fn new(
        item: &MenuItem,
        quantity: u32,
        customizations: Option<Vec<SelectedCustomization>>,
    ) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            category: item.category,
            image_url: item.image_url.clone(),
            customizable_options: item.customizable_options.clone(),
            quantity,
            customizations,
        }
    }

    /// Rebuild the base menu item from this line's snapshot.
    ///
    /// Used by reorder: the snapshot's price is authoritative, the current
    /// catalog is not consulted.
    pub fn menu_item(&self) -> MenuItem {
        MenuItem {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
            category: self.category,
            image_url: self.image_url.clone(),
            customizable_options: self.customizable_options.clone(),
        }
    }
}
