use serde::{Deserialize, Serialize};

use vitrine_core::{DomainError, DomainResult, ProductId, ReviewId};

/// Rating assigned to products that have not been rated yet (mid-scale).
pub const DEFAULT_RATING: f64 = 4.0;

/// Shortest accepted product name (after trimming).
const MIN_NAME_LEN: usize = 3;

/// A catalog product as stored and returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: String,
    pub image: String,
    pub rating: f64,
    pub views: i64,
}

/// A customer review; many per product, read-only to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub product_id: ProductId,
    pub content: String,
}

/// Validated input for inserting a product. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    name: String,
    price: f64,
    category: String,
    description: String,
    image: String,
}

impl NewProduct {
    /// Validate and normalize catalog-add input.
    ///
    /// Name and category are trimmed; the name must keep at least three
    /// characters, the category must be non-empty and the price must be a
    /// finite positive number.
    pub fn new(name: &str, price: f64, category: &str) -> DomainResult<Self> {
        let name = name.trim();
        if name.chars().count() < MIN_NAME_LEN {
            return Err(DomainError::validation(format!(
                "product name must be at least {MIN_NAME_LEN} characters"
            )));
        }

        if !(price.is_finite() && price > 0.0) {
            return Err(DomainError::validation("price must be a positive number"));
        }

        let category = category.trim();
        if category.is_empty() {
            return Err(DomainError::validation("category is required"));
        }

        Ok(Self {
            name: name.to_string(),
            price,
            category: category.to_string(),
            description: String::new(),
            image: String::new(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Materialize the stored row once the store has assigned an id.
    pub fn into_product(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            price: self.price,
            category: self.category,
            description: self.description,
            image: self.image,
            rating: DEFAULT_RATING,
            views: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_trims_and_defaults() {
        let p = NewProduct::new("  Linen Shirt ", 25.0, " Shirts ")
            .unwrap()
            .with_description("Breathable summer shirt")
            .into_product(ProductId::new(1));

        assert_eq!(p.name, "Linen Shirt");
        assert_eq!(p.category, "Shirts");
        assert_eq!(p.description, "Breathable summer shirt");
        assert_eq!(p.image, "");
        assert_eq!(p.rating, DEFAULT_RATING);
        assert_eq!(p.views, 0);
    }

    #[test]
    fn new_product_rejects_short_name() {
        let err = NewProduct::new(" ab ", 10.0, "Hats").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn new_product_rejects_non_positive_price() {
        for price in [0.0, -3.5, f64::NAN, f64::INFINITY] {
            let err = NewProduct::new("Scarf", price, "Accessories").unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)), "price {price} accepted");
        }
    }

    #[test]
    fn new_product_rejects_blank_category() {
        let err = NewProduct::new("Scarf", 9.0, "   ").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
