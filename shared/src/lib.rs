//! Shared types for the Daily Brew storefront
//!
//! Data-model types used across the storefront engine: menu catalog,
//! cart lines, orders, and the smoothie suggestion contract.

pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
