//! Deterministic clothing size ladder.
//!
//! Used when no generative provider is configured. Only weight drives the
//! result; height, fit preference and product type reach the model prompt
//! but are ignored here.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClothingSize {
    S,
    M,
    L,
    XL,
    XXL,
}

impl ClothingSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClothingSize::S => "S",
            ClothingSize::M => "M",
            ClothingSize::L => "L",
            ClothingSize::XL => "XL",
            ClothingSize::XXL => "XXL",
        }
    }
}

impl core::fmt::Display for ClothingSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Size-guide response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeSuggestion {
    pub suggested_size: ClothingSize,
    pub reason: String,
}

/// Threshold ladder on weight in kg.
///
/// Thresholds apply in ascending order, each overriding the last; the
/// under-60 check runs afterwards on its own.
pub fn size_for_weight(weight_kg: i32) -> ClothingSize {
    let mut size = ClothingSize::M;
    if weight_kg > 80 {
        size = ClothingSize::L;
    }
    if weight_kg > 95 {
        size = ClothingSize::XL;
    }
    if weight_kg > 110 {
        size = ClothingSize::XXL;
    }
    if weight_kg < 60 {
        size = ClothingSize::S;
    }
    size
}

pub fn deterministic_suggestion(weight_kg: i32) -> SizeSuggestion {
    let size = size_for_weight(weight_kg);
    SizeSuggestion {
        suggested_size: size,
        reason: format!("Based on a weight of {weight_kg} kg, size {size} is the best fit for ideal comfort."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ladder_reference_points() {
        assert_eq!(size_for_weight(50), ClothingSize::S);
        assert_eq!(size_for_weight(70), ClothingSize::M);
        assert_eq!(size_for_weight(85), ClothingSize::L);
        assert_eq!(size_for_weight(100), ClothingSize::XL);
        assert_eq!(size_for_weight(120), ClothingSize::XXL);
    }

    #[test]
    fn thresholds_are_strict() {
        assert_eq!(size_for_weight(60), ClothingSize::M);
        assert_eq!(size_for_weight(80), ClothingSize::M);
        assert_eq!(size_for_weight(95), ClothingSize::L);
        assert_eq!(size_for_weight(110), ClothingSize::XL);
        assert_eq!(size_for_weight(59), ClothingSize::S);
    }

    #[test]
    fn suggestion_serializes_as_plain_size() {
        let s = deterministic_suggestion(85);
        let v = serde_json::to_value(&s).unwrap();
        assert_eq!(v["suggested_size"], "L");
        assert!(v["reason"].as_str().unwrap().contains("85 kg"));
    }
}
