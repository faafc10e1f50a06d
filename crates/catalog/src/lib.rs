//! Catalog domain module.
//!
//! Products, reviews and the recommendation rules built on them, implemented
//! as deterministic domain logic (no IO, no HTTP, no storage). Randomness is
//! injected by callers through an `Rng`.

pub mod product;
pub mod recommend;
pub mod similarity;

pub use product::{DEFAULT_RATING, NewProduct, Product, Review};
pub use recommend::{RECOMMENDATION_COUNT, RecommendationStrategy, find_anchor, random_sample, rank_by_similarity, recommend};
pub use similarity::similarity;
