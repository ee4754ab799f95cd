//! Unified error handling for the action endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::shopify::AdminShopifyError;

/// Application-level error type for the seeder's HTTP surface.
#[derive(Debug, Error)]
pub enum AppError {
    /// Shopify API operation failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] AdminShopifyError),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log upstream failures with Sentry
        if matches!(self, Self::Shopify(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Seeder request error"
            );
        }

        let status = match &self {
            Self::Shopify(AdminShopifyError::RateLimited(_)) => StatusCode::TOO_MANY_REQUESTS,
            Self::Shopify(_) => StatusCode::BAD_GATEWAY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose upstream error details to clients
        let message = match &self {
            Self::Shopify(AdminShopifyError::RateLimited(secs)) => {
                format!("Shopify rate limit reached, retry after {secs} seconds")
            }
            Self::Shopify(_) => "External service error".to_string(),
            Self::BadRequest(_) => self.to_string(),
        };

        (status, message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("unknown action".to_string());
        assert_eq!(err.to_string(), "Bad request: unknown action");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Shopify(AdminShopifyError::MissingField(
                "productDelete".to_string()
            ))),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(AppError::Shopify(AdminShopifyError::RateLimited(4))),
            StatusCode::TOO_MANY_REQUESTS
        );
    }
}
