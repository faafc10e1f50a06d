//! Postgres-backed catalog.
//!
//! Two tables, `products` and `reviews`, created on startup if missing.
//! View counts are bumped with a single `UPDATE ... RETURNING` so concurrent
//! readers of the same product never lose an increment.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;

use vitrine_catalog::{NewProduct, Product, Review};
use vitrine_core::{ProductId, ReviewId};

use super::{CatalogStore, StoreError};

const PRODUCT_COLUMNS: &str = "id, name, price, category, description, image, rating, views";

/// Byte-order sort, same as the in-memory catalog, whatever the database locale.
const CATEGORIES_SQL: &str = r#"SELECT DISTINCT category FROM products ORDER BY category COLLATE "C""#;

pub struct PostgresCatalog {
    pool: PgPool,
}

impl PostgresCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect, then make sure the schema exists.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        let catalog = Self::new(pool);
        catalog.ensure_schema().await?;
        Ok(catalog)
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id          BIGSERIAL PRIMARY KEY,
                name        TEXT NOT NULL,
                price       DOUBLE PRECISION NOT NULL CHECK (price > 0),
                category    TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                image       TEXT NOT NULL DEFAULT '',
                rating      DOUBLE PRECISION NOT NULL DEFAULT 4.0,
                views       BIGINT NOT NULL DEFAULT 0
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reviews (
                id         BIGSERIAL PRIMARY KEY,
                product_id BIGINT NOT NULL REFERENCES products (id),
                content    TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS reviews_product_id_idx ON reviews (product_id)")
            .execute(&self.pool)
            .await?;

        tracing::info!("catalog schema ready");
        Ok(())
    }
}

fn product_from_row(row: &PgRow) -> Result<Product, sqlx::Error> {
    Ok(Product {
        id: ProductId::new(row.try_get("id")?),
        name: row.try_get("name")?,
        price: row.try_get("price")?,
        category: row.try_get("category")?,
        description: row.try_get("description")?,
        image: row.try_get("image")?,
        rating: row.try_get("rating")?,
        views: row.try_get("views")?,
    })
}

fn review_from_row(row: &PgRow) -> Result<Review, sqlx::Error> {
    Ok(Review {
        id: ReviewId::new(row.try_get("id")?),
        product_id: ProductId::new(row.try_get("product_id")?),
        content: row.try_get("content")?,
    })
}

#[async_trait]
impl CatalogStore for PostgresCatalog {
    async fn list_products(&self, category: Option<&str>) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE ($1::TEXT IS NULL OR category = $1) ORDER BY id"
        ))
        .bind(category)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(product_from_row).collect::<Result<_, _>>()?)
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(product_from_row).transpose()?)
    }

    async fn reviews_for(&self, product_id: ProductId) -> Result<Vec<Review>, StoreError> {
        let rows = sqlx::query("SELECT id, product_id, content FROM reviews WHERE product_id = $1 ORDER BY id")
            .bind(product_id.get())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(review_from_row).collect::<Result<_, _>>()?)
    }

    async fn insert_product(&self, product: NewProduct) -> Result<Product, StoreError> {
        let row = sqlx::query(&format!(
            r#"
            INSERT INTO products (name, price, category, description, image)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {PRODUCT_COLUMNS}
            "#
        ))
        .bind(product.name())
        .bind(product.price())
        .bind(product.category())
        .bind(product.description())
        .bind(product.image())
        .fetch_one(&self.pool)
        .await?;

        Ok(product_from_row(&row)?)
    }

    async fn record_view(&self, id: ProductId) -> Result<Option<Product>, StoreError> {
        let row = sqlx::query(&format!(
            "UPDATE products SET views = views + 1 WHERE id = $1 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(product_from_row).transpose()?)
    }

    async fn categories(&self) -> Result<Vec<String>, StoreError> {
        let rows = sqlx::query(CATEGORIES_SQL)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|r| r.try_get::<String, _>("category"))
            .collect::<Result<_, _>>()?)
    }
}
