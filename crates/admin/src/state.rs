//! Application state shared across handlers.

use std::sync::Arc;

use crate::services::ProductRepository;
use crate::shopify::{AdminClient, GraphQLTransport};

/// Application state shared across all handlers.
///
/// Generic over the transport so the router can be exercised against an
/// in-memory catalog.
pub struct AppState<T = AdminClient> {
    inner: Arc<AppStateInner<T>>,
}

struct AppStateInner<T> {
    products: ProductRepository<T>,
}

impl<T> Clone for AppState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: GraphQLTransport> AppState<T> {
    /// Build state around a transport.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                products: ProductRepository::new(transport),
            }),
        }
    }

    /// Product repository.
    #[must_use]
    pub fn products(&self) -> &ProductRepository<T> {
        &self.inner.products
    }
}
