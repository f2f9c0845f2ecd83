//! Menu catalog models

use serde::{Deserialize, Serialize};

/// Menu category (fixed enumeration)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Smoothies,
    Coffee,
    #[serde(rename = "Other Drinks")]
    OtherDrinks,
}

/// A single choice within a customization option group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub name: String,
    /// Price delta in currency units (e.g. 0.75 for oat milk)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change: Option<f64>,
}

/// A named choice group on a menu item (e.g. "Milk Type")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomizationOption {
    pub id: String,
    pub name: String,
    /// Ordered choices presented to the user
    pub choices: Vec<Choice>,
    /// Multi-select (checkbox) vs single-select (radio) semantics
    #[serde(default)]
    pub allows_multiple: bool,
}

/// Catalog entity. Created from static catalog data, never mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Base price, non-negative
    pub price: f64,
    pub category: Category,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customizable_options: Option<Vec<CustomizationOption>>,
}
