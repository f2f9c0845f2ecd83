//! Order models
//!
//! An [`Order`] is created once at checkout completion and never mutated
//! afterwards; status transitions are outside the storefront's scope.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::cart::CartLineItem;

/// Checkout input validation failure, surfaced verbatim to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct ValidationError(pub String);

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Delivered,
    Cancelled,
}

/// Customer-supplied checkout details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerDetails {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl CustomerDetails {
    /// Validate checkout form fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().chars().count() < 2 {
            return Err(ValidationError(
                "Name must be at least 2 characters.".into(),
            ));
        }
        // Minimal shape check: local part, one '@', domain with a dot
        let email = self.email.trim();
        let valid_email = match email.split_once('@') {
            Some((local, domain)) => {
                !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
            }
            None => false,
        };
        if !valid_email {
            return Err(ValidationError(
                "Please enter a valid email address.".into(),
            ));
        }
        if let Some(address) = &self.address {
            if address.trim().chars().count() < 5 {
                return Err(ValidationError(
                    "Address must be at least 5 characters.".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Mock payment details. Validated at checkout, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentDetails {
    pub card_number: String,
    /// MM/YY
    pub expiry_date: String,
    pub cvv: String,
}

impl PaymentDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.card_number.len() != 16 || !self.card_number.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError("Card number must be 16 digits.".into()));
        }
        if !is_valid_expiry(&self.expiry_date) {
            return Err(ValidationError(
                "Expiry date must be in MM/YY format.".into(),
            ));
        }
        if self.cvv.len() != 3 || !self.cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError("CVV must be 3 digits.".into()));
        }
        Ok(())
    }
}

fn is_valid_expiry(value: &str) -> bool {
    let Some((month, year)) = value.split_once('/') else {
        return false;
    };
    if month.len() != 2 || year.len() != 2 || !year.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    matches!(month.parse::<u8>(), Ok(m) if (1..=12).contains(&m))
}

/// Immutable order record created at checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Creation timestamp (RFC 3339 in the persisted form)
    pub date: DateTime<Utc>,
    /// Snapshot of the cart at the moment of submission
    pub items: Vec<CartLineItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_details: Option<CustomerDetails>,
}

impl Order {
    /// Short id suffix for user-facing references ("order #a1b2c3").
    ///
    /// Counts characters, not bytes, so ids from external sources cannot
    /// split a multibyte boundary.
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().rev().nth(5) {
            Some((idx, _)) => &self.id[idx..],
            None => &self.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_details_accepts_valid_input() {
        let details = CustomerDetails {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: None,
            address: Some("123 Main St, Anytown".into()),
        };
        assert!(details.validate().is_ok());
    }

    #[test]
    fn customer_details_rejects_short_name() {
        let details = CustomerDetails {
            name: "J".into(),
            email: "jane@example.com".into(),
            phone: None,
            address: None,
        };
        assert!(details.validate().is_err());
    }

    #[test]
    fn customer_details_rejects_bad_email() {
        for email in ["not-an-email", "missing@dot", "@example.com", ""] {
            let details = CustomerDetails {
                name: "Jane Doe".into(),
                email: email.into(),
                phone: None,
                address: None,
            };
            assert!(details.validate().is_err(), "accepted {email:?}");
        }
    }

    #[test]
    fn payment_details_rejects_malformed_fields() {
        let valid = PaymentDetails {
            card_number: "4111111111111111".into(),
            expiry_date: "09/27".into(),
            cvv: "123".into(),
        };
        assert!(valid.validate().is_ok());

        let mut bad = valid.clone();
        bad.card_number = "4111".into();
        assert!(bad.validate().is_err());

        let mut bad = valid.clone();
        bad.expiry_date = "13/27".into();
        assert!(bad.validate().is_err());

        let mut bad = valid.clone();
        bad.expiry_date = "0927".into();
        assert!(bad.validate().is_err());

        let mut bad = valid;
        bad.cvv = "12".into();
        assert!(bad.validate().is_err());
    }

    #[test]
    fn short_id_takes_last_six_chars() {
        let order = Order {
            id: "order-1716912000000".into(),
            date: Utc::now(),
            items: vec![],
            total_amount: 0.0,
            status: OrderStatus::Confirmed,
            customer_details: None,
        };
        assert_eq!(order.short_id(), "000000");
    }

    #[test]
    fn short_id_handles_short_and_multibyte_ids() {
        let mut order = Order {
            id: "ab".into(),
            date: Utc::now(),
            items: vec![],
            total_amount: 0.0,
            status: OrderStatus::Confirmed,
            customer_details: None,
        };
        assert_eq!(order.short_id(), "ab");

        order.id = "order-café-№42".into();
        assert_eq!(order.short_id(), "fé-№42");
    }
}
