//! Order assembly and history

mod checkout;
mod history;

pub use checkout::{Checkout, CheckoutError, reorder};
pub use history::OrderHistory;
