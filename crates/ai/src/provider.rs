use async_trait::async_trait;

use crate::result::ProviderError;

/// A text-completion service reachable over the network.
///
/// Each concrete provider (free tier, paid tier, ...) implements this
/// uniformly so the resolver can walk a list of them without knowing which
/// is which.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Short stable name used in logs and completion provenance.
    fn name(&self) -> &str;

    /// Whether the provider is configured well enough to be called.
    ///
    /// Unavailable providers are skipped without a call.
    fn is_available(&self) -> bool {
        true
    }

    /// Complete `prompt`, returning the model's text.
    async fn complete(&self, prompt: &str) -> Result<String, ProviderError>;
}
