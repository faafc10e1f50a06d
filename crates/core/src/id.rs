//! Strongly-typed identifiers used across the domain.
//!
//! Catalog rows are keyed by store-assigned integers, so ids wrap `i64`
//! rather than being minted by the service.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a catalog product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

/// Identifier of a product review.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(i64);

macro_rules! impl_int_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            pub const fn get(&self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<i64> for $t {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for i64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = i64::from_str(s.trim())
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_int_newtype!(ProductId, "ProductId");
impl_int_newtype!(ReviewId, "ReviewId");
