use crate::product::Product;

/// Price ratio (cheaper / dearer) above which two products count as
/// similarly priced.
const PRICE_RATIO_THRESHOLD: f64 = 0.7;

/// Category/price similarity in `[0, 1]`.
///
/// Half a point for an exact (case-sensitive) category match, half a point
/// when the cheaper price is more than 70% of the dearer one. Prices are
/// assumed to share a currency.
pub fn similarity(a: &Product, b: &Product) -> f64 {
    let mut score = 0.0;

    if a.category == b.category {
        score += 0.5;
    }

    let high = a.price.max(b.price);
    if high > 0.0 && a.price.min(b.price) / high > PRICE_RATIO_THRESHOLD {
        score += 0.5;
    }

    score
}
