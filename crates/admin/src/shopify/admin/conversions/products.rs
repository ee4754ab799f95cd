//! Product type conversion functions.

use catalog_seeder_core::{ProductGid, VariantGid};

use crate::shopify::types::{CreatedProduct, CreatedVariant, Product, ProductPage};

use super::super::queries::{get_products, product_create};

// =============================================================================
// ProductCreate conversions
// =============================================================================

pub fn convert_created_product(
    product: product_create::ProductCreateProductCreateProduct,
) -> CreatedProduct {
    CreatedProduct {
        id: ProductGid::new(product.id),
        title: product.title,
        handle: product.handle,
        status: product.status,
        variants: product
            .variants
            .edges
            .into_iter()
            .map(|e| CreatedVariant {
                id: VariantGid::new(e.node.id),
                price: e.node.price,
                barcode: e.node.barcode,
                created_at: e.node.created_at,
            })
            .collect(),
    }
}

// =============================================================================
// GetProducts conversions
// =============================================================================

/// Convert a listing response into a [`ProductPage`].
///
/// An empty `endCursor` string is treated the same as an absent one.
pub fn convert_product_page(products: get_products::GetProductsProducts) -> ProductPage {
    ProductPage {
        products: products
            .nodes
            .into_iter()
            .map(|n| Product {
                id: ProductGid::new(n.id),
                handle: n.handle,
            })
            .collect(),
        end_cursor: products.page_info.end_cursor.filter(|c| !c.is_empty()),
        has_next_page: products.page_info.has_next_page,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::shopify::types::PageInfo;

    #[test]
    fn test_convert_product_page_normalizes_empty_cursor() {
        let page = convert_product_page(get_products::GetProductsProducts {
            page_info: PageInfo {
                has_next_page: false,
                end_cursor: Some(String::new()),
            },
            nodes: vec![],
        });

        assert_eq!(page, ProductPage::default());
    }

    #[test]
    fn test_convert_product_page_keeps_order() {
        let page = convert_product_page(get_products::GetProductsProducts {
            page_info: PageInfo {
                has_next_page: true,
                end_cursor: Some("c2".to_string()),
            },
            nodes: vec![
                get_products::GetProductsProductsNodes {
                    id: "gid://shopify/Product/1".to_string(),
                    handle: "red-snowboard".to_string(),
                },
                get_products::GetProductsProductsNodes {
                    id: "gid://shopify/Product/2".to_string(),
                    handle: "green-snowboard".to_string(),
                },
            ],
        });

        let handles: Vec<_> = page.products.iter().map(|p| p.handle.as_str()).collect();
        assert_eq!(handles, ["red-snowboard", "green-snowboard"]);
        assert_eq!(page.end_cursor.as_deref(), Some("c2"));
        assert!(page.has_next_page);
    }
}
