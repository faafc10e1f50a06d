use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension},
    response::IntoResponse,
    Json,
};

use vitrine_ai::{article_default, normalize_or_else, prompts};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Blog article as a JSON object. Whatever object the model returns is passed
/// through; unusable text is wrapped in the default article shape.
pub async fn generate_seo_article(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<dto::ArticleRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    let raw = services.resolver.complete_text(&prompts::seo_article(&body.topic)).await;
    Json(normalize_or_else(&raw, || article_default(&body.topic, &raw))).into_response()
}
