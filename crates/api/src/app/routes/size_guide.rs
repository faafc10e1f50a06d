use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    response::IntoResponse,
    Json,
};

use vitrine_ai::{deterministic_suggestion, normalize_or_else, prompts, size_guide_default};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Clothing size advice.
///
/// With no provider configured the weight ladder answers directly and the
/// other measurements are ignored.
pub async fn size_guide(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::SizeRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    if !services.resolver.has_available_provider() {
        return Json(deterministic_suggestion(body.weight)).into_response();
    }

    let prompt = prompts::size_guide(body.height, body.weight, &body.fit_preference, &body.product_type);
    let raw = services.resolver.complete_text(&prompt).await;
    Json(normalize_or_else(&raw, size_guide_default)).into_response()
}
