//! Infrastructure layer: catalog storage, provider clients, config.

pub mod catalog;
pub mod config;
pub mod providers;

pub use catalog::{CatalogStore, InMemoryCatalog, PostgresCatalog, StoreError};
pub use config::{AppConfig, ConfigError};
pub use providers::{GeminiProvider, OpenAiProvider, ProviderSettings, build_resolver};
