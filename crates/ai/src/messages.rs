//! Fixed user-facing messages returned without a provider call.

/// `/ai/analyze_cart` with an empty cart.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is still empty! Are you looking for something specific?";

/// `/ai/analyze/{id}` for a product without reviews.
pub const NOT_ENOUGH_REVIEWS_MESSAGE: &str = "There are not enough reviews to analyze yet.";

/// `/products/add` success.
pub const PRODUCT_ADDED_MESSAGE: &str = "Product added with an AI-written description!";
