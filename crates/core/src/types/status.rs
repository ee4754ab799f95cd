//! Status enums for catalog entities.

use serde::{Deserialize, Serialize};

/// Product status in the admin.
///
/// Maps to Shopify's `ProductStatus` enum. Values introduced by newer API
/// versions deserialize to [`ProductStatus::Unknown`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    /// Product is visible on the storefront.
    Active,
    /// Product is not visible (work in progress).
    #[default]
    Draft,
    /// Product is hidden/archived.
    Archived,
    /// Product is unlisted (not shown in search/collections but accessible via URL).
    Unlisted,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Draft => write!(f, "DRAFT"),
            Self::Archived => write!(f, "ARCHIVED"),
            Self::Unlisted => write!(f, "UNLISTED"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}
