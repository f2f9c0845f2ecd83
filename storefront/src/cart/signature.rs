//! Customization signature
//!
//! Canonical string key for a customization combination, used both for
//! cart-line identity and to address specific lines for mutation/removal.
//! Two selections with the same set of (option id, chosen value) pairs
//! produce the same signature regardless of selection order.

use shared::models::SelectedCustomization;

/// Sentinel signature for a line with no customizations
pub const DEFAULT_SIGNATURE: &str = "default";

const DELIMITER: &str = "|";

/// Reduce a customization set to its canonical signature.
///
/// Deterministic, order-independent, and total: `None` and the empty slice
/// both map to [`DEFAULT_SIGNATURE`].
pub fn customization_signature(customizations: Option<&[SelectedCustomization]>) -> String {
    let Some(customizations) = customizations.filter(|c| !c.is_empty()) else {
        return DEFAULT_SIGNATURE.to_string();
    };
    let mut parts: Vec<String> = customizations
        .iter()
        .map(|c| format!("{}:{}", c.option_id, c.selected_value))
        .collect();
    parts.sort();
    parts.join(DELIMITER)
}
