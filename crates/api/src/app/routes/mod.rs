use axum::{
    routing::{get, post},
    Router,
};

pub mod assistant;
pub mod content;
pub mod products;
pub mod recommendations;
pub mod reviews;
pub mod shopping;
pub mod size_guide;
pub mod system;

/// Router for every endpoint. The storefront is anonymous, so there is no
/// authenticated sub-tree.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(system::health))
        .route("/categories", get(products::list_categories))
        .route("/recommendations", post(recommendations::recommend))
        .nest("/products", products::router())
        .nest("/ai", ai_router())
}

fn ai_router() -> Router {
    Router::new()
        .route("/assist", post(assistant::assist))
        .route("/analyze/:product_id", get(reviews::analyze_product))
        .route("/analyze_cart", post(shopping::analyze_cart))
        .route("/generate_offer", post(shopping::generate_offer))
        .route("/compare", post(shopping::compare_products))
        .route("/generate_seo_article", post(content::generate_seo_article))
        .route("/size_guide", post(size_guide::size_guide))
}
