//! Type conversions from GraphQL response types to domain types.
//!
//! These functions convert the wire types in `queries` into our clean
//! domain types.

mod products;

pub use products::{convert_created_product, convert_product_page};

use crate::shopify::types::UserError;

/// Join mutation `userErrors` into a single message.
pub fn format_user_errors(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
