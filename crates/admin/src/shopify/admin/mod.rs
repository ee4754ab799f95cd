//! Shopify Admin API GraphQL client.
//!
//! This module provides the HTTPS implementation of [`GraphQLTransport`]
//! against the Shopify Admin API. Authentication is an offline access token
//! issued by the app's session provider.

use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::instrument;

use crate::config::ShopifyAdminConfig;

use super::{
    AdminShopifyError, GraphQLError, GraphQLErrorLocation, GraphQLOperation, GraphQLTransport,
};

pub mod conversions;
pub mod queries;

/// Shopify Admin API GraphQL client.
///
/// Cheap to clone; clones share one connection pool.
///
/// # Security
///
/// This client carries an access token with write access to the whole
/// catalog. `Debug` never prints it.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: SecretString,
}

impl std::fmt::Debug for AdminClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminClient")
            .field("endpoint", &self.inner.endpoint)
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

/// GraphQL response wrapper.
#[derive(Debug, Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLErrorResponse>>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorResponse {
    message: String,
    #[serde(default)]
    locations: Vec<GraphQLErrorLocationResponse>,
    #[serde(default)]
    path: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct GraphQLErrorLocationResponse {
    line: i64,
    column: i64,
}

impl AdminClient {
    /// Create a new Admin API client.
    ///
    /// # Arguments
    ///
    /// * `config` - Shopify Admin API configuration
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::Http` if the HTTP client cannot be built.
    pub fn new(config: &ShopifyAdminConfig) -> Result<Self, AdminShopifyError> {
        Self::with_endpoint(
            config.graphql_endpoint(),
            config.access_token.clone(),
            config.request_timeout,
        )
    }

    /// Create a client for an explicit GraphQL endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns `AdminShopifyError::Http` if the HTTP client cannot be built.
    pub fn with_endpoint(
        endpoint: impl Into<String>,
        access_token: SecretString,
        timeout: Duration,
    ) -> Result<Self, AdminShopifyError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            inner: Arc::new(AdminClientInner {
                client,
                endpoint: endpoint.into(),
                access_token,
            }),
        })
    }
}

impl GraphQLTransport for AdminClient {
    #[instrument(skip(self, operation), fields(operation = operation.operation_name))]
    async fn execute(
        &self,
        operation: GraphQLOperation,
    ) -> Result<serde_json::Value, AdminShopifyError> {
        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header(
                "X-Shopify-Access-Token",
                self.inner.access_token.expose_secret(),
            )
            .header("Content-Type", "application/json")
            .json(&operation)
            .send()
            .await?;

        // Check for rate limiting
        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            // Shopify sends fractional seconds ("2.0")
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<f64>().ok())
                .map_or(60, |secs| secs.ceil().max(0.0) as u64);
            return Err(AdminShopifyError::RateLimited(retry_after));
        }

        // Check for unauthorized
        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AdminShopifyError::Unauthorized(
                "Invalid or expired access token".to_string(),
            ));
        }

        let response = response.error_for_status()?;
        let graphql_response: GraphQLResponse<serde_json::Value> = response.json().await?;

        // Check for GraphQL errors
        if let Some(errors) = graphql_response.errors
            && !errors.is_empty()
        {
            let converted_errors: Vec<GraphQLError> = errors
                .into_iter()
                .map(|e| GraphQLError {
                    message: e.message,
                    locations: e
                        .locations
                        .into_iter()
                        .map(|l| GraphQLErrorLocation {
                            line: l.line,
                            column: l.column,
                        })
                        .collect(),
                    path: e.path,
                })
                .collect();
            tracing::warn!(errors = converted_errors.len(), "GraphQL errors in response");
            return Err(AdminShopifyError::GraphQL(converted_errors));
        }

        match graphql_response.data {
            Some(data) if !data.is_null() => Ok(data),
            _ => Err(AdminShopifyError::graphql("No data in response")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let client = AdminClient::with_endpoint(
            "https://test.myshopify.com/admin/api/2024-01/graphql.json",
            SecretString::from("shpat_super_secret_token"),
            Duration::from_secs(5),
        )
        .unwrap();

        let debug_output = format!("{client:?}");
        assert!(debug_output.contains("test.myshopify.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("shpat_super_secret_token"));
    }

    #[test]
    fn test_graphql_response_parsing() {
        let response: GraphQLResponse<serde_json::Value> = serde_json::from_value(
            serde_json::json!({
                "data": null,
                "errors": [{"message": "Throttled", "locations": [{"line": 1, "column": 2}]}]
            }),
        )
        .unwrap();

        assert!(response.data.is_none());
        let errors = response.errors.unwrap();
        assert_eq!(errors[0].message, "Throttled");
        assert_eq!(errors[0].locations[0].column, 2);
    }
}
