//! Google Gemini `generateContent` client.
//!
//! Gemini has no system role in the simple text form, so the store persona is
//! prepended to the user's prompt.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use vitrine_ai::prompts::STORE_PERSONA;
use vitrine_ai::{Provider, ProviderError};

use super::{read_json, transport_error};

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";

pub struct GeminiProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl GeminiProvider {
    pub fn new(client: Client, api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            model: model.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    /// Point the client at another endpoint (local stubs).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

/// Persona first, then the question.
pub fn request_body(prompt: &str) -> Value {
    json!({
        "contents": [{
            "parts": [{ "text": format!("{STORE_PERSONA}\n\nUser Question: {prompt}") }]
        }]
    })
}

/// `candidates[0].content.parts[0].text`
pub fn parse_response(body: &Value) -> Result<String, ProviderError> {
    body["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ProviderError::MalformedResponse("missing candidates[0].content.parts[0].text".to_string()))
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }

    async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let Some(key) = self.api_key.as_deref() else {
            return Err(ProviderError::Unavailable);
        };

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", key)
            .json(&request_body(prompt))
            .send()
            .await
            .map_err(transport_error)?;

        let body = read_json(response).await?;
        parse_response(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_is_prepended_to_question() {
        let body = request_body("Do you ship to Alexandria?");
        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap();

        assert!(text.starts_with(STORE_PERSONA));
        assert!(text.ends_with("\n\nUser Question: Do you ship to Alexandria?"));
    }

    #[test]
    fn parses_first_candidate() {
        let body = json!({
            "candidates": [
                { "content": { "parts": [{ "text": "first" }, { "text": "ignored" }] } },
                { "content": { "parts": [{ "text": "second" }] } }
            ]
        });
        assert_eq!(parse_response(&body).unwrap(), "first");
    }

    #[test]
    fn blocked_prompt_is_malformed() {
        let body = json!({ "promptFeedback": { "blockReason": "SAFETY" } });
        assert!(matches!(parse_response(&body), Err(ProviderError::MalformedResponse(_))));
    }

    #[test]
    fn blank_key_is_unavailable() {
        let p = GeminiProvider::new(Client::new(), Some("  ".to_string()), DEFAULT_GEMINI_MODEL);
        assert!(!p.is_available());

        let p = GeminiProvider::new(Client::new(), Some("k".to_string()), "gemini-1.5-flash")
            .with_base_url("http://127.0.0.1:9/");
        assert!(p.is_available());
        assert_eq!(p.url(), "http://127.0.0.1:9/models/gemini-1.5-flash:generateContent");
    }

    #[tokio::test]
    async fn unconfigured_call_fails_without_network() {
        let p = GeminiProvider::new(Client::new(), None, DEFAULT_GEMINI_MODEL);
        assert_eq!(p.complete("hi").await, Err(ProviderError::Unavailable));
    }
}
