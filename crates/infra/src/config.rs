//! Process configuration read from the environment.
//!
//! Every variable has a default so the service starts with an empty
//! environment: in-memory catalog, no providers, canned replies.

use std::time::Duration;

use thiserror::Error;

use vitrine_ai::resolver::DEFAULT_PROVIDER_TIMEOUT;
use vitrine_catalog::RecommendationStrategy;

use crate::providers::ProviderSettings;
use crate::providers::gemini::DEFAULT_GEMINI_MODEL;
use crate::providers::openai::DEFAULT_OPENAI_MODEL;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_FRONTEND_URL: &str = "https://e-commerce-website-orcin-xi.vercel.app";

/// Local dev servers always allowed by CORS.
pub const LOCAL_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:3006"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

impl ConfigError {
    fn invalid(var: &'static str, reason: impl ToString) -> Self {
        Self::Invalid {
            var,
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    /// `None` selects the in-memory catalog.
    pub database_url: Option<String>,
    pub frontend_url: String,
    pub providers: ProviderSettings,
    pub provider_timeout: Duration,
    pub recommendation_strategy: RecommendationStrategy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            database_url: None,
            frontend_url: DEFAULT_FRONTEND_URL.to_string(),
            providers: ProviderSettings {
                google_api_key: None,
                gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
                openai_api_key: None,
                openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            },
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
            recommendation_strategy: RecommendationStrategy::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key/value source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(v) => v.parse::<u16>().map_err(|e| ConfigError::invalid("PORT", e))?,
            None => defaults.port,
        };

        let provider_timeout = match get("PROVIDER_TIMEOUT_SECS") {
            Some(v) => {
                let secs = v
                    .parse::<u64>()
                    .map_err(|e| ConfigError::invalid("PROVIDER_TIMEOUT_SECS", e))?;
                if secs == 0 {
                    return Err(ConfigError::invalid("PROVIDER_TIMEOUT_SECS", "must be at least 1"));
                }
                Duration::from_secs(secs)
            }
            None => defaults.provider_timeout,
        };

        let recommendation_strategy = match get("RECOMMENDATION_STRATEGY") {
            Some(v) => v
                .parse::<RecommendationStrategy>()
                .map_err(|e| ConfigError::invalid("RECOMMENDATION_STRATEGY", e))?,
            None => defaults.recommendation_strategy,
        };

        Ok(Self {
            port,
            database_url: get("DATABASE_URL"),
            frontend_url: get("FRONTEND_URL").unwrap_or(defaults.frontend_url),
            providers: ProviderSettings {
                google_api_key: get("GOOGLE_API_KEY"),
                gemini_model: get("GEMINI_MODEL").unwrap_or(defaults.providers.gemini_model),
                openai_api_key: get("OPENAI_API_KEY"),
                openai_model: get("OPENAI_MODEL").unwrap_or(defaults.providers.openai_model),
            },
            provider_timeout,
            recommendation_strategy,
        })
    }

    /// CORS origins: the two local dev servers plus the deployed frontend.
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins: Vec<String> = LOCAL_ORIGINS.iter().map(|o| o.to_string()).collect();
        let frontend = self.frontend_url.trim_end_matches('/').to_string();
        if !origins.contains(&frontend) {
            origins.push(frontend);
        }
        origins
    }
}
