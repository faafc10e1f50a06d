//! `vitrine-core`: ids and the domain error type.
//!
//! Pure domain primitives; no I/O.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{ProductId, ReviewId};
