//! `vitrine-ai`
//!
//! **Responsibility:** generative text for the storefront.
//!
//! This crate is intentionally **not** part of the catalog model:
//! - It must not depend on catalog types or storage.
//! - Prompt builders are pure functions of their inputs.
//! - Provider failures never escape: the resolver always yields text.
//!
//! Concrete network providers live in `vitrine-infra`; this crate only
//! defines the `Provider` capability and the fallback chain over it.

pub mod canned;
pub mod messages;
pub mod normalize;
pub mod prompts;
pub mod provider;
pub mod resolver;
pub mod result;
pub mod size_guide;

pub use normalize::{article_default, extract_json_object, normalize_or_else, size_guide_default};
pub use provider::Provider;
pub use resolver::ProviderResolver;
pub use result::{Completion, CompletionSource, NormalizeError, ProviderError};
pub use size_guide::{ClothingSize, SizeSuggestion, deterministic_suggestion, size_for_weight};
