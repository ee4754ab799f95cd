//! Delete every product in the catalog.
//!
//! The whole catalog is paged into memory before the first deletion so the
//! listing cursor is never invalidated by our own mutations. Deletions then run
//! one at a time in collection order. The first failure aborts the run and
//! whatever was already deleted stays deleted.

use std::collections::HashSet;

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::shopify::{AdminShopifyError, DeletedProduct, GraphQLTransport, Product};

use super::products::ProductRepository;

/// Page size of the first listing call, which only checks for emptiness.
pub const FIRST_PAGE_SIZE: i64 = 1;

/// Page size of every continuation call.
pub const PAGE_SIZE: i64 = 25;

/// Outcome of a bulk deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkDeleteReport {
    /// Number of products deleted.
    pub deleted_count: usize,
    /// The last deletion, in collection order. `None` when nothing was deleted.
    pub last_deleted: Option<DeletedProduct>,
}

impl BulkDeleteReport {
    /// The last deletion, or the `{id: "", handle: ""}` signal.
    #[must_use]
    pub fn last_deleted_or_empty(&self) -> DeletedProduct {
        self.last_deleted
            .clone()
            .unwrap_or_else(DeletedProduct::empty)
    }
}

/// Pages through the catalog and deletes everything it finds.
#[derive(Debug)]
pub struct BulkDeleter<'a, T> {
    repository: &'a ProductRepository<T>,
}

impl<'a, T: GraphQLTransport> BulkDeleter<'a, T> {
    /// Create a deleter using [`FIRST_PAGE_SIZE`] and [`PAGE_SIZE`].
    #[must_use]
    pub const fn new(repository: &'a ProductRepository<T>) -> Self {
        Self { repository }
    }

    /// Collect every product, then delete them sequentially.
    ///
    /// Returns a report whose `last_deleted` is the final deletion in
    /// collection order, or `None` when the first page carried no cursor.
    ///
    /// # Errors
    ///
    /// Fails fast on the first listing or deletion error. Products deleted
    /// before the failure are not restored.
    #[instrument(skip(self))]
    pub async fn delete_all_products(&self) -> Result<BulkDeleteReport, AdminShopifyError> {
        let products = self.collect_all_products().await?;

        if products.is_empty() {
            info!("No products to delete");
            return Ok(BulkDeleteReport::default());
        }

        let total = products.len();
        info!(total, "Deleting products");

        let mut last_deleted = None;
        for (index, product) in products.iter().enumerate() {
            let deleted = self.repository.delete_product(product).await?;
            debug!(
                product_id = %deleted.id,
                progress = index + 1,
                total,
                "Deleted product"
            );
            last_deleted = Some(deleted);
        }

        info!(deleted = total, "Deleted all products");
        Ok(BulkDeleteReport {
            deleted_count: total,
            last_deleted,
        })
    }

    /// Page through the whole catalog and return every product in order.
    ///
    /// A first page without a cursor yields an empty list, even if it
    /// returned nodes.
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::Pagination` when a cursor would be
    /// requested a second time or a page claims more results without a
    /// cursor, and propagates listing errors.
    pub async fn collect_all_products(&self) -> Result<Vec<Product>, AdminShopifyError> {
        let first = self
            .repository
            .list_products_page(None, FIRST_PAGE_SIZE)
            .await?;

        let Some(mut cursor) = first.end_cursor else {
            debug!(
                returned = first.products.len(),
                "First page has no cursor, treating catalog as empty"
            );
            return Ok(Vec::new());
        };

        let mut products = first.products;
        let mut has_next_page = first.has_next_page;
        let mut requested = HashSet::new();

        while has_next_page {
            if !requested.insert(cursor.clone()) {
                warn!(%cursor, "Listing cursor repeated");
                return Err(AdminShopifyError::Pagination(format!(
                    "cursor {cursor} was already requested"
                )));
            }

            let page = self
                .repository
                .list_products_page(Some(&cursor), PAGE_SIZE)
                .await?;

            products.extend(page.products);
            has_next_page = page.has_next_page;
            if !has_next_page {
                break;
            }

            let Some(next) = page.end_cursor else {
                warn!(after = %cursor, "Page reported more products without a cursor");
                return Err(AdminShopifyError::Pagination(format!(
                    "page after {cursor} reported more products without a cursor"
                )));
            };
            cursor = next;
        }

        debug!(collected = products.len(), "Collected catalog");
        Ok(products)
    }
}
