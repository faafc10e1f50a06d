use std::collections::BTreeSet;
use std::sync::RwLock;

use async_trait::async_trait;

use vitrine_catalog::{NewProduct, Product, Review};
use vitrine_core::{ProductId, ReviewId};

use super::{CatalogStore, StoreError};

/// In-memory catalog for tests/dev.
///
/// Ids are assigned sequentially from 1, like the SQL sequences.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    reviews: Vec<Review>,
    last_product_id: i64,
    last_review_id: i64,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog pre-filled with `products`, in order.
    pub fn with_products<I>(products: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = NewProduct>,
    {
        let catalog = Self::new();
        for p in products {
            catalog.seed_product(p)?;
        }
        Ok(catalog)
    }

    /// Insert a product synchronously (seeding).
    pub fn seed_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        inner.last_product_id += 1;
        let stored = product.into_product(ProductId::new(inner.last_product_id));
        inner.products.push(stored.clone());
        Ok(stored)
    }

    /// Attach a review to a product (reviews are created outside the service).
    pub fn add_review(&self, product_id: ProductId, content: impl Into<String>) -> Result<Review, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        inner.last_review_id += 1;
        let review = Review {
            id: ReviewId::new(inner.last_review_id),
            product_id,
            content: content.into(),
        };
        inner.reviews.push(review.clone());
        Ok(review)
    }
}

#[async_trait]
impl CatalogStore for InMemoryCatalog {
    async fn list_products(&self, category: Option<&str>) -> Result<Vec<Product>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner
            .products
            .iter()
            .filter(|p| category.is_none_or(|c| p.category == c))
            .cloned()
            .collect())
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.products.iter().find(|p| p.id == id).cloned())
    }

    async fn reviews_for(&self, product_id: ProductId) -> Result<Vec<Review>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(inner
            .reviews
            .iter()
            .filter(|r| r.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn insert_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        self.seed_product(product)
    }

    async fn record_view(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let mut inner = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        Ok(inner.products.iter_mut().find(|p| p.id == id).map(|p| {
            p.views += 1;
            p.clone()
        }))
    }

    async fn categories(&self) -> Result<Vec<String>, StoreError> {
        let inner = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        let set: BTreeSet<&str> = inner.products.iter().map(|p| p.category.as_str()).collect();
        Ok(set.into_iter().map(str::to_string).collect())
    }
}
