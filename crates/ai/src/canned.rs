//! Canned responses served when no provider answers.

/// Served for prompts that mention the cart.
pub const CART_RESPONSE: &str =
    "I recommend adding a pair of high-quality Bluetooth headphones; they will round off your purchase perfectly!";

/// Served for prompts that mention an offer.
pub const OFFER_RESPONSE: &str =
    "A special offer just for you! Get 15% off if you complete your purchase within the next 10 minutes.";

/// Served for everything else.
pub const GENERIC_RESPONSE: &str =
    "This is a sample reply from the smart assistant (no AI provider is reachable right now). The product is great and a good fit for you!";

/// Pick a canned response by keyword, case-insensitively.
///
/// `cart` is checked before `offer`.
pub fn canned_response(prompt: &str) -> &'static str {
    let prompt = prompt.to_lowercase();
    if prompt.contains("cart") {
        CART_RESPONSE
    } else if prompt.contains("offer") {
        OFFER_RESPONSE
    } else {
        GENERIC_RESPONSE
    }
}
