//! Domain types for Shopify Admin API.
//!
//! These types provide a clean, ergonomic API separate from the raw
//! wire types in `shopify::queries`.

pub mod common;
pub mod product;

// Re-export all types for convenience
pub use common::*;
pub use product::*;
