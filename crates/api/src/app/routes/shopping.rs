//! Cart, offer and comparison helpers. None of these touch the catalog.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    response::IntoResponse,
    Json,
};

use vitrine_ai::messages::EMPTY_CART_MESSAGE;
use vitrine_ai::prompts;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn analyze_cart(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CartAnalysisRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    if body.items.is_empty() {
        return Json(dto::SuggestionResponse {
            suggestion: EMPTY_CART_MESSAGE.to_string(),
        })
        .into_response();
    }

    let prompt = prompts::cart_analysis(&body.items, &body.user_query);
    let suggestion = services.resolver.complete_text(&prompt).await;
    Json(dto::SuggestionResponse { suggestion }).into_response()
}

pub async fn generate_offer(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::OfferRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    let offer_message = services.resolver.complete_text(&prompts::offer(&body.query)).await;
    Json(dto::OfferResponse { offer_message }).into_response()
}

pub async fn compare_products(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::CompareRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    let prompt = prompts::comparison(&body.product1, &body.product2);
    let comparison = services.resolver.complete_text(&prompt).await;
    Json(dto::ComparisonResponse { comparison }).into_response()
}
