//! Smoothie suggestion client
//!
//! Request/response contract to a generative-text backend. The input is
//! validated before it is forwarded, the backend is a single opaque call
//! with no retry policy, and the reply must match the
//! [`SmoothieSuggestion`] schema exactly: a response missing any required
//! field (or with wrong field types) fails the call rather than returning a
//! partial object.

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use shared::models::{SmoothieSuggestion, SuggestionRequest, ValidationError};

use crate::config::Config;

#[derive(Debug, Error)]
pub enum SuggestionError {
    #[error(transparent)]
    InvalidRequest(#[from] ValidationError),

    #[error("generation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation backend returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("generation backend returned no text")]
    EmptyResponse,

    #[error("malformed suggestion response: {0}")]
    MalformedResponse(String),
}

/// Opaque text-generation boundary. One prompt in, one raw completion out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, SuggestionError>;
}

/// Google Generative Language API backend
pub struct GeminiGenerator {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl GeminiGenerator {
    pub fn new(config: &Config) -> Result<Self, SuggestionError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            client,
            api_url: config.gemini_api_url.trim_end_matches('/').to_string(),
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
        })
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, SuggestionError> {
        let url = format!("{}/models/{}:generateContent", self.api_url, self.model);
        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "responseMimeType": "application/json" }
        });

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SuggestionError::Status(response.status()));
        }

        let value: Value = response.json().await?;
        value
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or(SuggestionError::EmptyResponse)
    }
}

/// Smoothie suggestion contract over any [`TextGenerator`].
///
/// Stateless; every call is independent and nothing is cached.
pub struct SuggestionClient<G> {
    generator: G,
}

impl<G: TextGenerator> SuggestionClient<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub async fn get_suggestion(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SmoothieSuggestion, SuggestionError> {
        request.validate()?;

        let restrictions = match request.dietary_restrictions.trim() {
            "" => "None",
            r => r,
        };
        let prompt = render_prompt(request.ingredients.trim(), restrictions);
        debug!(ingredients = %request.ingredients, restrictions = %restrictions, "Requesting smoothie suggestion");

        let raw = self.generator.generate(&prompt).await?;
        parse_suggestion(&raw)
    }
}

fn render_prompt(ingredients: &str, dietary_restrictions: &str) -> String {
    format!(
        "You are a smoothie expert. A user will provide you with a list of ingredients \
         that they like, as well as dietary restrictions. Your goal is to suggest a \
         smoothie that they would enjoy. Return a JSON object with the fields \
         \"smoothieName\" (string), \"ingredients\" (array of strings), \
         \"instructions\" (string), and \"description\" (string).\n\n\
         Ingredients: {ingredients}\n\
         Dietary Restrictions: {dietary_restrictions}\n\n\
         Make sure the smoothie adheres to their dietary restrictions. Return the \
         ingredients as a list of strings."
    )
}

/// Strict structural validation of the model output.
///
/// Field presence and types are checked explicitly rather than relying on
/// deserialization defaults, so a partial reply can never leak through.
fn parse_suggestion(raw: &str) -> Result<SmoothieSuggestion, SuggestionError> {
    let value: Value = serde_json::from_str(strip_code_fences(raw))
        .map_err(|e| SuggestionError::MalformedResponse(format!("not valid JSON: {e}")))?;
    let object = value
        .as_object()
        .ok_or_else(|| SuggestionError::MalformedResponse("expected a JSON object".into()))?;

    let require_string = |field: &str| -> Result<String, SuggestionError> {
        object
            .get(field)
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| {
                SuggestionError::MalformedResponse(format!("missing or non-string field `{field}`"))
            })
    };

    let smoothie_name = require_string("smoothieName")?;
    let instructions = require_string("instructions")?;
    let description = require_string("description")?;
    let ingredients = object
        .get("ingredients")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            SuggestionError::MalformedResponse("missing or non-array field `ingredients`".into())
        })?
        .iter()
        .map(|v| {
            v.as_str().map(str::to_owned).ok_or_else(|| {
                SuggestionError::MalformedResponse("`ingredients` entries must be strings".into())
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(SmoothieSuggestion {
        smoothie_name,
        ingredients,
        instructions,
        description,
    })
}

/// Models sometimes wrap JSON in Markdown fences despite the JSON mime hint.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}
