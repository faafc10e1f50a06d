//! Catalog storage abstractions.
//!
//! The service only reads products and reviews, inserts new products and
//! bumps view counters, so the trait stays that narrow.

pub mod in_memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use vitrine_catalog::{NewProduct, Product, Review};
use vitrine_core::ProductId;

pub use in_memory::InMemoryCatalog;
pub use postgres::PostgresCatalog;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("catalog lock poisoned")]
    Poisoned,
}

/// Product/review store backing the storefront.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Products in insertion order, optionally restricted to one category
    /// (exact match).
    async fn list_products(&self, category: Option<&str>) -> Result<Vec<Product>, StoreError>;

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Reviews of one product, oldest first.
    async fn reviews_for(&self, product_id: ProductId) -> Result<Vec<Review>, StoreError>;

    /// Insert a validated product and return the stored row.
    async fn insert_product(&self, product: NewProduct) -> Result<Product, StoreError>;

    /// Increment the view counter in place and return the updated row.
    async fn record_view(&self, id: ProductId) -> Result<Option<Product>, StoreError>;

    /// Distinct categories, sorted.
    async fn categories(&self) -> Result<Vec<String>, StoreError>;
}

#[async_trait]
impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    async fn list_products(&self, category: Option<&str>) -> Result<Vec<Product>, StoreError> {
        (**self).list_products(category).await
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).get_product(id).await
    }

    async fn reviews_for(&self, product_id: ProductId) -> Result<Vec<Review>, StoreError> {
        (**self).reviews_for(product_id).await
    }

    async fn insert_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        (**self).insert_product(product).await
    }

    async fn record_view(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        (**self).record_view(id).await
    }

    async fn categories(&self) -> Result<Vec<String>, StoreError> {
        (**self).categories().await
    }
}
