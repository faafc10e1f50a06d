use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};

use vitrine_ai::messages::PRODUCT_ADDED_MESSAGE;
use vitrine_ai::prompts;
use vitrine_catalog::NewProduct;
use vitrine_core::{DomainError, ProductId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Category value the storefront sends for "no filter".
pub const ALL_CATEGORIES: &str = "All";

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/add", post(add_product))
        .route("/:id", get(get_product))
}

/// Validate, ask the provider chain for marketing copy, then store.
pub async fn add_product(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::AddProductQuery>, QueryRejection>,
) -> axum::response::Response {
    let Query(q) = match query {
        Ok(q) => q,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", e.body_text()),
    };

    let draft = match NewProduct::new(&q.name, q.price, &q.cat) {
        Ok(p) => p,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let prompt = prompts::product_description(draft.name(), draft.category());
    let description = services.resolver.complete_text(&prompt).await;

    let product = match services.catalog.insert_product(draft.with_description(description)).await {
        Ok(p) => p,
        Err(e) => return errors::store_error_to_response(e),
    };

    tracing::info!(product_id = %product.id, category = %product.category, "product added");

    Json(dto::ProductAddedResponse {
        message: PRODUCT_ADDED_MESSAGE,
        product,
    })
    .into_response()
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Query(q): Query<dto::ListProductsQuery>,
) -> axum::response::Response {
    let category = q
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty() && *c != ALL_CATEGORIES);
    match services.catalog.list_products(category).await {
        Ok(items) => Json(dto::ProductListResponse { items }).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}

/// Product detail; every successful read counts as a view.
pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: ProductId = match id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    match services.catalog.record_view(id).await {
        Ok(Some(product)) => Json(product).into_response(),
        Ok(None) => errors::domain_error_to_response(DomainError::not_found()),
        Err(e) => errors::store_error_to_response(e),
    }
}

pub async fn list_categories(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.catalog.categories().await {
        Ok(categories) => Json(categories).into_response(),
        Err(e) => errors::store_error_to_response(e),
    }
}
