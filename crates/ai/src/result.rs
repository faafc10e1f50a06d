use thiserror::Error;

/// Where a completion's text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionSource {
    /// A configured provider answered (by provider name).
    Provider(String),
    /// No provider answered; the text is a canned response.
    Fallback,
}

/// Result of running a prompt through the fallback chain.
///
/// This is never an error: when every provider is unavailable or fails the
/// text is a keyword-selected canned response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub text: String,
    pub source: CompletionSource,
}

impl Completion {
    pub fn from_provider(provider: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: CompletionSource::Provider(provider.into()),
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: CompletionSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.source, CompletionSource::Fallback)
    }
}

/// Failure of a single provider call.
///
/// The resolver logs these and moves on to the next provider; they are never
/// shown to the end user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The provider is not configured (e.g. no API key).
    #[error("provider not configured")]
    Unavailable,

    #[error("provider call timed out after {0} ms")]
    Timeout(u128),

    /// Transport-level failure (DNS, TLS, connection reset, ...).
    #[error("transport error: {0}")]
    Transport(String),

    /// Non-success HTTP status (authentication, quota, server error).
    #[error("provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The body did not have the expected shape.
    #[error("malformed provider response: {0}")]
    MalformedResponse(String),

    #[error("provider returned an empty completion")]
    EmptyCompletion,
}

/// Why a completion could not be read as a structured payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// No `{ ... }` span in the text.
    #[error("no JSON object found in completion")]
    NoObject,

    #[error("malformed JSON object: {0}")]
    Malformed(String),
}
