use serde::{Deserialize, Serialize};
use serde_json::Value;

use vitrine_ai::prompts::{CartItem, ProductSketch};
use vitrine_catalog::Product;

// -------------------------
// Request DTOs
// -------------------------

/// Body of `/ai/assist` and `/recommendations`.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub user_query: String,
    /// Free-form entries from the storefront: product names or objects with
    /// a `name` field.
    #[serde(default)]
    pub history: Vec<Value>,
}

/// Query string of `/products/add`.
#[derive(Debug, Deserialize)]
pub struct AddProductQuery {
    pub name: String,
    pub price: f64,
    pub cat: String,
}

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CartAnalysisRequest {
    #[serde(default)]
    pub items: Vec<CartItem>,
    pub user_query: String,
}

#[derive(Debug, Deserialize)]
pub struct OfferRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub product1: ProductSketch,
    pub product2: ProductSketch,
}

#[derive(Debug, Deserialize)]
pub struct ArticleRequest {
    pub topic: String,
}

#[derive(Debug, Deserialize)]
pub struct SizeRequest {
    /// Centimetres.
    pub height: i32,
    /// Kilograms.
    pub weight: i32,
    pub fit_preference: String,
    pub product_type: String,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub analysis: String,
}

#[derive(Debug, Serialize)]
pub struct ProductAddedResponse {
    pub message: &'static str,
    pub product: Product,
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub items: Vec<Product>,
}

#[derive(Debug, Serialize)]
pub struct SuggestionResponse {
    pub suggestion: String,
}

#[derive(Debug, Serialize)]
pub struct OfferResponse {
    pub offer_message: String,
}

#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub comparison: String,
}
