use async_trait::async_trait;
use reqwest::Client;
use serde_json::{Value, json};

use vitrine_ai::prompts::STORE_PERSONA;
use vitrine_ai::{Provider, ProviderError};

use super::{read_json, transport_error};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Key value shipped in sample `.env` files; treated as "no key".
pub const PLACEHOLDER_OPENAI_KEY: &str = "YOUR_OPENAI_API_KEY";

/// OpenAI chat-completions client. The persona goes in the system message.
pub struct OpenAiProvider {
    client: Client,
    api_key: Option<String>,
    model: String,
    base_url: String,
}

impl OpenAiProvider {
    pub fn new(client: Client, api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.filter(|k| is_real_key(k)),
            model: model.into(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

fn is_real_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key != PLACEHOLDER_OPENAI_KEY
}

pub fn request_body(model: &str, prompt: &str) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": STORE_PERSONA },
            { "role": "user", "content": prompt }
        ]
    })
}

/// `choices[0].message.content`
pub fn parse_response(body: &Value) -> Result<String, ProviderError> {
    body["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| ProviderError::MalformedResponse("missing choices[0].message.content".to_string()))
}

#[async_trait]
impl Provider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
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
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(key)
            .json(&request_body(&self.model, prompt))
            .send()
            .await
            .map_err(transport_error)?;

        let body = read_json(response).await?;
        parse_response(&body)
    }
}
