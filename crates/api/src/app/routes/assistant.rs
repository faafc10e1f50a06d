use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    response::IntoResponse,
    Json,
};

use vitrine_ai::prompts;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Chat assistant grounded on a sample of catalog names.
///
/// A catalog outage only shrinks the sample; the customer still gets an answer.
pub async fn assist(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::ChatRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    let products = match services.catalog.list_products(None).await {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, "catalog unavailable; assistant prompt has no product sample");
            Vec::new()
        }
    };

    let prompt = prompts::assistant(&body.user_query, products.iter().map(|p| p.name.as_str()));
    let answer = services.resolver.complete_text(&prompt).await;

    Json(dto::AnswerResponse { answer }).into_response()
}
