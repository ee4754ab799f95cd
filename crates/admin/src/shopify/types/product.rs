//! Product domain types for Shopify Admin API.

use catalog_seeder_core::{Price, ProductGid, ProductStatus, VariantGid};
use serde::{Deserialize, Serialize};

// =============================================================================
// Product Types
// =============================================================================

/// A catalog entry as seen by the listing and delete operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductGid,
    /// URL handle.
    pub handle: String,
}

/// A variant of a freshly created product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedVariant {
    /// Variant ID.
    pub id: VariantGid,
    /// Current price.
    pub price: Price,
    /// Barcode.
    pub barcode: Option<String>,
    /// Creation timestamp.
    pub created_at: Option<String>,
}

/// A product returned by `productCreate`, including server-assigned fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedProduct {
    /// Product ID.
    pub id: ProductGid,
    /// Product title.
    pub title: String,
    /// URL handle.
    pub handle: String,
    /// Product status.
    pub status: ProductStatus,
    /// Product variants (first 10).
    pub variants: Vec<CreatedVariant>,
}

/// Confirmation of a single deletion.
///
/// `id` comes from the remote confirmation; `handle` is carried over from the
/// product that was asked to be deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeletedProduct {
    /// Deleted product ID as confirmed by Shopify.
    pub id: String,
    /// Handle of the deleted product.
    pub handle: String,
}

impl DeletedProduct {
    /// The `{id: "", handle: ""}` value reported when nothing was deleted.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            id: String::new(),
            handle: String::new(),
        }
    }
}

// =============================================================================
// Pagination Types
// =============================================================================

/// One page of the product listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    /// Products in server order.
    pub products: Vec<Product>,
    /// Cursor to continue after this page (absent on an empty page).
    pub end_cursor: Option<String>,
    /// Whether more pages exist.
    pub has_next_page: bool,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deleted_product_empty_signal() {
        let empty = DeletedProduct::empty();
        assert!(empty.id.is_empty());
        assert_eq!(
            serde_json::to_value(&empty).unwrap(),
            serde_json::json!({"id": "", "handle": ""})
        );
    }

    #[test]
    fn test_created_product_serializes_camel_case() {
        let product = CreatedProduct {
            id: ProductGid::new("gid://shopify/Product/1"),
            title: "Red Snowboard".to_string(),
            handle: "red-snowboard".to_string(),
            status: ProductStatus::Active,
            variants: vec![CreatedVariant {
                id: VariantGid::new("gid://shopify/ProductVariant/2"),
                price: Price::from_cents(1250),
                barcode: None,
                created_at: Some("2024-01-01T00:00:00Z".to_string()),
            }],
        };

        let value = serde_json::to_value(&product).unwrap();
        assert_eq!(value["status"], "ACTIVE");
        assert_eq!(value["variants"][0]["price"], "12.50");
        assert_eq!(value["variants"][0]["createdAt"], "2024-01-01T00:00:00Z");
    }
}
