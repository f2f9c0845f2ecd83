//! Data models

pub mod cart;
pub mod menu;
pub mod order;
pub mod suggestion;

pub use cart::{CartLineItem, SelectedCustomization};
pub use menu::{Category, Choice, CustomizationOption, MenuItem};
pub use order::{CustomerDetails, Order, OrderStatus, PaymentDetails, ValidationError};
pub use suggestion::{SmoothieSuggestion, SuggestionRequest};
