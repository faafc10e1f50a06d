//! Ordered provider fallback chain.
//!
//! Providers are tried one after another in configured priority order (the
//! free tier first, the paid tier second). Unconfigured providers are skipped
//! without a call, failed or timed-out calls are logged and skipped, and when
//! nothing answers the prompt gets a canned response. Callers always receive
//! text.

use std::sync::Arc;
use std::time::Duration;

use crate::canned::canned_response;
use crate::provider::Provider;
use crate::result::{Completion, ProviderError};

/// Per-provider call budget used when none is configured.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Clone)]
pub struct ProviderResolver {
    providers: Vec<Arc<dyn Provider>>,
    timeout: Duration,
}

impl ProviderResolver {
    /// Build a resolver over `providers`, highest priority first.
    pub fn new(providers: Vec<Arc<dyn Provider>>) -> Self {
        Self {
            providers,
            timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    /// A resolver with no providers; every prompt gets a canned response.
    pub fn canned_only() -> Self {
        Self::new(Vec::new())
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Provider names in priority order.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// True when at least one provider is configured to be called.
    pub fn has_available_provider(&self) -> bool {
        self.providers.iter().any(|p| p.is_available())
    }

    /// Run `prompt` through the chain.
    pub async fn complete(&self, prompt: &str) -> Completion {
        for provider in &self.providers {
            if !provider.is_available() {
                tracing::debug!(provider = provider.name(), "provider not configured; skipping");
                continue;
            }

            match self.attempt(provider.as_ref(), prompt).await {
                Ok(text) => {
                    tracing::info!(
                        provider = provider.name(),
                        chars = text.len(),
                        "completion served"
                    );
                    return Completion::from_provider(provider.name(), text);
                }
                Err(e) => {
                    tracing::warn!(provider = provider.name(), error = %e, "provider failed; trying next");
                }
            }
        }

        tracing::info!("no provider answered; serving canned response");
        Completion::fallback(canned_response(prompt))
    }

    /// Run `prompt` through the chain and keep only the text.
    pub async fn complete_text(&self, prompt: &str) -> String {
        self.complete(prompt).await.text
    }

    async fn attempt(&self, provider: &dyn Provider, prompt: &str) -> Result<String, ProviderError> {
        let text = tokio::time::timeout(self.timeout, provider.complete(prompt))
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout.as_millis()))??;

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyCompletion);
        }
        Ok(text)
    }
}

impl std::fmt::Debug for ProviderResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderResolver")
            .field("providers", &self.provider_names())
            .field("timeout", &self.timeout)
            .finish()
    }
}
