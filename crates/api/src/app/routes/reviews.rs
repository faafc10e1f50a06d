use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::IntoResponse,
    Json,
};

use vitrine_ai::messages::NOT_ENOUGH_REVIEWS_MESSAGE;
use vitrine_ai::prompts;
use vitrine_core::ProductId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Summarize a product's reviews. No reviews means no provider call.
pub async fn analyze_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(product_id): Path<String>,
) -> axum::response::Response {
    let product_id: ProductId = match product_id.parse() {
        Ok(id) => id,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let reviews = match services.catalog.reviews_for(product_id).await {
        Ok(r) => r,
        Err(e) => return errors::store_error_to_response(e),
    };

    if reviews.is_empty() {
        return Json(dto::AnalysisResponse {
            analysis: NOT_ENOUGH_REVIEWS_MESSAGE.to_string(),
        })
        .into_response();
    }

    let prompt = prompts::review_summary(reviews.iter().map(|r| r.content.as_str()));
    let analysis = services.resolver.complete_text(&prompt).await;

    Json(dto::AnalysisResponse { analysis }).into_response()
}
