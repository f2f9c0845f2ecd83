//! Smoothie suggestion contract
//!
//! Both sides of the generative-text boundary. The response is produced
//! externally, but the schema is owned here: a reply missing any field is a
//! contract violation, never a partial object.

use serde::{Deserialize, Serialize};

use super::order::ValidationError;

/// Suggestion request: free-text comma-separated lists, not structured data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    /// Ingredients the user likes
    pub ingredients: String,
    /// Dietary restrictions (e.g. vegan, gluten-free); defaults to "None"
    #[serde(default = "default_restrictions")]
    pub dietary_restrictions: String,
}

fn default_restrictions() -> String {
    "None".to_string()
}

impl SuggestionRequest {
    pub fn new(ingredients: impl Into<String>, dietary_restrictions: Option<String>) -> Self {
        Self {
            ingredients: ingredients.into(),
            dietary_restrictions: dietary_restrictions
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(default_restrictions),
        }
    }

    /// Minimal shape check before the request is forwarded.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ingredients.trim().is_empty() {
            return Err(ValidationError(
                "Please list at least one ingredient.".into(),
            ));
        }
        Ok(())
    }
}

/// Suggestion response schema; all four fields are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmoothieSuggestion {
    pub smoothie_name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub description: String,
}
