//! Shopify Admin API access (HIGH PRIVILEGE).
//!
//! # Security
//!
//! **This module holds the Shopify Admin API access token.**
//!
//! The token can create and delete every product in the store, so it is kept
//! in a `SecretString` and never logged.
//!
//! # Architecture
//!
//! - [`GraphQLTransport`] is the single capability the catalog code needs:
//!   execute a GraphQL document with variables and hand back the JSON `data`.
//! - [`AdminClient`] implements it over HTTPS with `reqwest`.
//! - Operation definitions implement `graphql_client::GraphQLQuery`, so the
//!   request envelope is the crate's `QueryBody`.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_seeder_admin::shopify::AdminClient;
//! use catalog_seeder_admin::services::ProductRepository;
//!
//! let client = AdminClient::new(&config.shopify)?;
//! let products = ProductRepository::new(client);
//!
//! let page = products.list_products_page(None, 25).await?;
//! ```

mod admin;
mod transport;
pub mod types;

pub use admin::AdminClient;
pub use admin::queries;
pub(crate) use admin::conversions;
pub use transport::{GraphQLOperation, GraphQLTransport, execute_query};
pub use types::*;

#[cfg(test)]
pub(crate) use transport::testing;

use thiserror::Error;

/// Errors that can occur when interacting with Shopify Admin API.
///
/// Every variant is a remote-operation failure; callers propagate them
/// unchanged and nothing in this crate retries.
#[derive(Debug, Error)]
pub enum AdminShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// User error from mutation (e.g., invalid input).
    #[error("User error: {0}")]
    UserError(String),

    /// The response was well-formed but lacked a field the operation relies on.
    #[error("Missing field in response: {0}")]
    MissingField(String),

    /// The product listing stopped advancing.
    #[error("Pagination error: {0}")]
    Pagination(String),

    /// The request was rejected locally before reaching Shopify.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AdminShopifyError {
    /// Build a single-message GraphQL error.
    #[must_use]
    pub fn graphql(message: impl Into<String>) -> Self {
        Self::GraphQL(vec![GraphQLError {
            message: message.into(),
            locations: vec![],
            path: vec![],
        }])
    }
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}
