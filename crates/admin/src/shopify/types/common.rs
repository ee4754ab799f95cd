//! Common domain types shared across Shopify Admin API.

use serde::{Deserialize, Serialize};

// =============================================================================
// Pagination Types
// =============================================================================

/// Forward pagination information.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Whether there are more items after this page.
    pub has_next_page: bool,
    /// Cursor for the last item.
    pub end_cursor: Option<String>,
}

// =============================================================================
// Mutation Errors
// =============================================================================

/// A validation error reported in a mutation payload's `userErrors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    /// Path to the offending input field, if any.
    pub field: Option<Vec<String>>,
    /// Human-readable message.
    pub message: String,
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) if !field.is_empty() => write!(f, "{}: {}", field.join("."), self.message),
            _ => f.write_str(&self.message),
        }
    }
}
