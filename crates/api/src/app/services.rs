use std::sync::Arc;

use vitrine_ai::ProviderResolver;
use vitrine_catalog::RecommendationStrategy;
use vitrine_infra::{AppConfig, CatalogStore, InMemoryCatalog, PostgresCatalog, StoreError, build_resolver};

/// Everything a handler needs, shared behind one `Arc`.
pub struct AppServices {
    pub catalog: Arc<dyn CatalogStore>,
    pub resolver: ProviderResolver,
    pub strategy: RecommendationStrategy,
}

impl AppServices {
    pub fn new(catalog: Arc<dyn CatalogStore>, resolver: ProviderResolver, strategy: RecommendationStrategy) -> Self {
        Self {
            catalog,
            resolver,
            strategy,
        }
    }

    /// In-memory catalog and canned replies only.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCatalog::new()),
            ProviderResolver::canned_only(),
            RecommendationStrategy::default(),
        )
    }
}

/// Wire services from configuration.
///
/// Postgres is used when `DATABASE_URL` is set; otherwise products live in
/// memory for the life of the process.
pub async fn build_services(config: &AppConfig) -> Result<AppServices, StoreError> {
    let catalog: Arc<dyn CatalogStore> = match config.database_url.as_deref() {
        Some(url) => {
            tracing::info!("using postgres catalog");
            Arc::new(PostgresCatalog::connect(url).await?)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using in-memory catalog");
            Arc::new(InMemoryCatalog::new())
        }
    };

    let resolver = build_resolver(&config.providers, config.provider_timeout);
    if !resolver.has_available_provider() {
        tracing::warn!("no AI provider configured; every reply will be canned");
    }

    tracing::info!(strategy = ?config.recommendation_strategy, "recommendation strategy");

    Ok(AppServices::new(catalog, resolver, config.recommendation_strategy))
}
