use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    response::IntoResponse,
    Json,
};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn recommend(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::ChatRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    let products = match services.catalog.list_products(None).await {
        Ok(p) => p,
        Err(e) => return errors::store_error_to_response(e),
    };

    let recommendations = {
        let mut rng = rand::thread_rng();
        vitrine_catalog::recommend(services.strategy, &body.history, &products, &mut rng)
    };

    tracing::debug!(
        query = %body.user_query,
        count = recommendations.len(),
        strategy = ?services.strategy,
        "recommendations served"
    );

    Json(dto::RecommendationsResponse { recommendations }).into_response()
}
