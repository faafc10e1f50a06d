//! Recommendation sampling.
//!
//! Two strategies exist: the uniform random sample the storefront has always
//! served, and a similarity ranking around a product the customer already
//! looked at. The random sample stays the default.

use core::cmp::Ordering;
use core::str::FromStr;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use vitrine_core::DomainError;

use crate::product::Product;
use crate::similarity::similarity;

/// Maximum number of products returned per recommendation request.
pub const RECOMMENDATION_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationStrategy {
    /// Uniform random sample, independent of query and history.
    #[default]
    Random,
    /// Rank by `similarity` to the first product named in the history.
    Similarity,
}

impl FromStr for RecommendationStrategy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "similarity" => Ok(Self::Similarity),
            other => Err(DomainError::validation(format!(
                "unknown recommendation strategy '{other}' (expected random or similarity)"
            ))),
        }
    }
}

/// Up to `count` distinct products chosen uniformly at random.
pub fn random_sample<R: Rng + ?Sized>(products: &[Product], count: usize, rng: &mut R) -> Vec<Product> {
    products.choose_multiple(rng, count).cloned().collect()
}

/// Products other than `anchor`, best match first, at most `count` of them.
///
/// Ties keep catalog order.
pub fn rank_by_similarity(anchor: &Product, products: &[Product], count: usize) -> Vec<Product> {
    let mut scored: Vec<(f64, &Product)> = products
        .iter()
        .filter(|p| p.id != anchor.id)
        .map(|p| (similarity(anchor, p), p))
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    scored.into_iter().take(count).map(|(_, p)| p.clone()).collect()
}

/// First history entry that names a catalog product.
///
/// History entries are free-form: a bare product name or an object with a
/// `name` field. Anything else is skipped.
pub fn find_anchor<'a>(history: &[Value], products: &'a [Product]) -> Option<&'a Product> {
    history.iter().find_map(|entry| {
        let name = match entry {
            Value::String(s) => s.as_str(),
            Value::Object(map) => map.get("name")?.as_str()?,
            _ => return None,
        };
        products.iter().find(|p| p.name == name)
    })
}

/// Apply `strategy` to the catalog.
///
/// The similarity strategy falls back to the random sample when no history
/// entry names a known product.
pub fn recommend<R: Rng + ?Sized>(
    strategy: RecommendationStrategy,
    history: &[Value],
    products: &[Product],
    rng: &mut R,
) -> Vec<Product> {
    match strategy {
        RecommendationStrategy::Random => random_sample(products, RECOMMENDATION_COUNT, rng),
        RecommendationStrategy::Similarity => match find_anchor(history, products) {
            Some(anchor) => rank_by_similarity(anchor, products, RECOMMENDATION_COUNT),
            None => random_sample(products, RECOMMENDATION_COUNT, rng),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;
    use std::collections::HashSet;
    use vitrine_core::ProductId;

    fn product(id: i64, name: &str, category: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            price,
            category: category.to_string(),
            description: String::new(),
            image: String::new(),
            rating: 4.0,
            views: 0,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(1, "Silk Dress", "Dresses", 120.0),
            product(2, "Denim Jacket", "Jackets", 90.0),
            product(3, "Maxi Dress", "Dresses", 110.0),
            product(4, "Wool Scarf", "Accessories", 20.0),
            product(5, "Cotton Dress", "Dresses", 30.0),
            product(6, "Leather Belt", "Accessories", 105.0),
        ]
    }

    #[test]
    fn strategy_parses_case_insensitively() {
        assert_eq!("Similarity".parse::<RecommendationStrategy>().unwrap(), RecommendationStrategy::Similarity);
        assert_eq!(" random ".parse::<RecommendationStrategy>().unwrap(), RecommendationStrategy::Random);
        assert!("popular".parse::<RecommendationStrategy>().is_err());
    }

    #[test]
    fn random_sample_is_bounded_and_distinct() {
        let products = catalog();
        let mut rng = StdRng::seed_from_u64(7);

        let picked = random_sample(&products, RECOMMENDATION_COUNT, &mut rng);
        assert_eq!(picked.len(), RECOMMENDATION_COUNT);

        let ids: HashSet<_> = picked.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), RECOMMENDATION_COUNT);
        assert!(picked.iter().all(|p| products.contains(p)));
    }

    #[test]
    fn random_sample_of_small_catalog_returns_everything() {
        let products = catalog()[..2].to_vec();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(random_sample(&products, RECOMMENDATION_COUNT, &mut rng).len(), 2);
        assert!(random_sample(&[], RECOMMENDATION_COUNT, &mut rng).is_empty());
    }

    #[test]
    fn random_strategy_ignores_history() {
        // Known limitation: history carries no relevance signal for the random strategy.
        let products = catalog();
        let history = vec![json!("Silk Dress")];
        let a = recommend(RecommendationStrategy::Random, &history, &products, &mut StdRng::seed_from_u64(3));
        let b = recommend(RecommendationStrategy::Random, &[], &products, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }

    #[test]
    fn similarity_ranks_same_category_similar_price_first() {
        let products = catalog();
        let ranked = rank_by_similarity(&products[0], &products, RECOMMENDATION_COUNT);

        let names: Vec<&str> = ranked.iter().map(|p| p.name.as_str()).collect();
        // Maxi Dress scores 1.0; the three 0.5 scores keep catalog order.
        assert_eq!(names, vec!["Maxi Dress", "Denim Jacket", "Cotton Dress", "Leather Belt"]);
        assert!(ranked.iter().all(|p| p.id != products[0].id));
    }

    #[test]
    fn anchor_accepts_names_and_objects() {
        let products = catalog();
        let history = vec![json!(42), json!({"name": "Unknown"}), json!({"name": "Wool Scarf", "quantity": 1})];
        assert_eq!(find_anchor(&history, &products).map(|p| p.id), Some(ProductId::new(4)));

        let history = vec![json!("Denim Jacket")];
        assert_eq!(find_anchor(&history, &products).map(|p| p.id), Some(ProductId::new(2)));

        assert!(find_anchor(&[json!("nothing")], &products).is_none());
    }

    #[test]
    fn similarity_strategy_without_anchor_falls_back_to_random() {
        let products = catalog();
        let mut rng = StdRng::seed_from_u64(11);
        let picked = recommend(RecommendationStrategy::Similarity, &[json!("no match")], &products, &mut rng);
        assert_eq!(picked.len(), RECOMMENDATION_COUNT);
    }
}
