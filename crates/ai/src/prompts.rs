//! Prompt builders.
//!
//! Every builder is a pure function of its inputs. Structured use cases (SEO
//! article, size guide) embed a literal example object and end with
//! [`JSON_ONLY_SUFFIX`] so the reply can go through the normalizer.

use serde::{Deserialize, Serialize};

/// Store persona sent as the system preamble.
///
/// Providers with a system role send it as a system message; the others
/// prepend it to the user text.
pub const STORE_PERSONA: &str = "You are the smart assistant of CELIA FASHION DESIGN, a store specialising in modern clothing and fashion. \
Contact details: phone 01126212452, email sayedelazameydesign@gmail.com. \
Always reply in Arabic, in a friendly and professional tone.";

/// How many catalog names the assistant prompt carries.
pub const ASSISTANT_SAMPLE_SIZE: usize = 10;

/// Appended to prompts whose reply must be a JSON object.
pub const JSON_ONLY_SUFFIX: &str = " Only return valid JSON.";

/// Coupon code quoted in offer messages.
pub const OFFER_COUPON: &str = "WELCOME20";

const UNKNOWN_ITEM: &str = "Unknown";

/// One cart line as sent by the storefront. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<i64>,
}

impl CartItem {
    pub fn named(name: impl Into<String>, quantity: i64) -> Self {
        Self {
            name: Some(name.into()),
            quantity: Some(quantity),
        }
    }

    /// `name (Qty: quantity)`, defaulting to `Unknown` and 1.
    pub fn describe(&self) -> String {
        format!(
            "{} (Qty: {})",
            self.name.as_deref().unwrap_or(UNKNOWN_ITEM),
            self.quantity.unwrap_or(1)
        )
    }
}

/// Name and description of a product being compared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSketch {
    pub name: String,
    pub description: String,
}

/// Customer question plus the first [`ASSISTANT_SAMPLE_SIZE`] catalog names,
/// in the order given.
pub fn assistant<I, S>(question: &str, product_names: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let names = product_names
        .into_iter()
        .take(ASSISTANT_SAMPLE_SIZE)
        .map(|n| n.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Customer question: {question}\n\
         Available products: {names}\n\
         Help the customer with their question. If they ask for a recommendation, suggest products from the available list."
    )
}

/// Summarize the key points of a product's reviews.
pub fn review_summary<I, S>(reviews: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let text = reviews
        .into_iter()
        .map(|r| r.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(" | ");
    format!("Analyze the following reviews of this product and summarize the most important points: {text}")
}

/// Short marketing copy for a new catalog entry.
pub fn product_description(name: &str, category: &str) -> String {
    format!("Write a short marketing description for the product {name} in the {category} category.")
}

/// Suggest one complementary product for a non-empty cart.
pub fn cart_analysis(items: &[CartItem], question: &str) -> String {
    let lines = items.iter().map(CartItem::describe).collect::<Vec<_>>().join(", ");
    format!(
        "The customer has the following products in their cart: {lines}.\n\
         Based on the cart and the customer's question: \"{question}\",\n\
         give a piece of advice or suggest one product that completes this set."
    )
}

/// Persuade a hesitant buyer, quoting [`OFFER_COUPON`].
pub fn offer(interest: &str) -> String {
    format!(
        "The customer is hesitant to buy. Based on their interest in '{interest}', write a very short and highly \
         tempting offer message that encourages them to pay now, with the discount code '{OFFER_COUPON}'."
    )
}

pub fn comparison(first: &ProductSketch, second: &ProductSketch) -> String {
    format!(
        "Compare these two products for a shopper:\n\
         1. {}: {}\n\
         2. {}: {}\n\
         Explain the key difference and which one suits a mid-range budget best.",
        first.name, first.description, second.name, second.description
    )
}

/// Blog article request with an example object to mimic.
pub fn seo_article(topic: &str) -> String {
    let body = format!(
        r#"Act as an SEO expert and professional e-marketer. Write a blog article about: "{topic}".
The article must:
1. Be SEO friendly with strong keywords.
2. Be formatted as HTML (use <h2> for headings and <p> for paragraphs).
3. Have a very catchy title.
4. End with an "Expert tip" section.

Return the result as JSON only:
{{
    "title": "Title Here",
    "content": "HTML Content Here",
    "meta_description": "Short description for Google",
    "keywords": ["tag1", "tag2"]
}}"#
    );
    body + JSON_ONLY_SUFFIX
}

/// Tailor-style size request with an example object to mimic.
pub fn size_guide(height_cm: i32, weight_kg: i32, fit_preference: &str, product_type: &str) -> String {
    let body = format!(
        r#"Act as a clothing measurements expert (tailor). The customer's details:
Height: {height_cm} cm
Weight: {weight_kg} kg
Fit preference: {fit_preference} (tight, regular or loose)
Product type: {product_type}

Required:
1. Suggest the best international size (S, M, L, XL, XXL).
2. Give a very short tip (one sentence) on why this size fits best.

Return the result as JSON only:
{{
    "suggested_size": "L",
    "reason": "Based on your weight and height, size L will be comfortable and suit your height."
}}"#
    );
    body + JSON_ONLY_SUFFIX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_samples_first_ten_names_in_order() {
        let names: Vec<String> = (1..=12).map(|i| format!("P{i}")).collect();
        let prompt = assistant("Do you have dresses?", &names);

        assert!(prompt.contains("Customer question: Do you have dresses?"));
        assert!(prompt.contains("Available products: P1, P2, P3, P4, P5, P6, P7, P8, P9, P10\n"));
        assert!(!prompt.contains("P11"));
    }

    #[test]
    fn cart_lines_default_missing_fields() {
        let items = vec![
            CartItem::named("Silk Dress", 2),
            CartItem { name: None, quantity: Some(3) },
            CartItem { name: Some("Belt".to_string()), quantity: None },
        ];
        let prompt = cart_analysis(&items, "what else?");

        assert!(prompt.contains("Silk Dress (Qty: 2), Unknown (Qty: 3), Belt (Qty: 1)."));
        assert!(prompt.contains("\"what else?\""));
    }

    #[test]
    fn cart_item_deserializes_partial_objects() {
        let item: CartItem = serde_json::from_str(r#"{"price": 10}"#).unwrap();
        assert_eq!(item.describe(), "Unknown (Qty: 1)");
    }

    #[test]
    fn reviews_are_pipe_joined() {
        let prompt = review_summary(["Great fit", "Runs small"]);
        assert!(prompt.ends_with("Great fit | Runs small"));
    }

    #[test]
    fn offer_quotes_coupon() {
        let prompt = offer("summer dresses");
        assert!(prompt.contains("'summer dresses'"));
        assert!(prompt.contains("'WELCOME20'"));
    }

    #[test]
    fn comparison_lists_both_products() {
        let a = ProductSketch { name: "A".to_string(), description: "light".to_string() };
        let b = ProductSketch { name: "B".to_string(), description: "warm".to_string() };
        let prompt = comparison(&a, &b);
        assert!(prompt.contains("1. A: light\n2. B: warm\n"));
    }

    #[test]
    fn structured_prompts_embed_example_and_suffix() {
        let article = seo_article("linen in summer");
        assert!(article.contains("\"meta_description\": \"Short description for Google\""));
        assert!(article.ends_with("} Only return valid JSON."));

        let size = size_guide(175, 82, "regular", "t-shirt");
        assert!(size.contains("Height: 175 cm\nWeight: 82 kg"));
        assert!(size.contains("\"suggested_size\": \"L\""));
        assert!(size.ends_with(JSON_ONLY_SUFFIX));
    }

    #[test]
    fn persona_is_static() {
        assert!(STORE_PERSONA.contains("CELIA FASHION DESIGN"));
        assert!(STORE_PERSONA.contains("Arabic"));
    }
}
