//! HTTP route handlers for the seeder.
//!
//! # Route Structure
//!
//! ```text
//! GET    /health               - Liveness check
//!
//! # Product actions (form field `actionType`)
//! POST   /app                  - actionType=generate | delete
//! DELETE /app                  - same dispatch, used by the delete button
//! ```

use axum::{
    Router,
    routing::{get, post},
};

use crate::shopify::GraphQLTransport;
use crate::state::AppState;

pub mod products;

/// Build the application router.
pub fn routes<T: GraphQLTransport + 'static>() -> Router<AppState<T>> {
    Router::new()
        .route("/health", get(health))
        .route("/app", post(products::action::<T>).delete(products::action::<T>))
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check Shopify.
async fn health() -> &'static str {
    "ok"
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::shopify::testing::ScriptedTransport;

    fn post_action(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/app")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app: Router = routes().with_state(AppState::new(ScriptedTransport::new()));

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unknown_action_makes_no_calls() {
        let state = AppState::new(ScriptedTransport::new());
        let app: Router = routes().with_state(state.clone());

        let response = app.oneshot(post_action("actionType=archive")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(state.products().transport().recorded().is_empty());
    }

    #[tokio::test]
    async fn test_delete_on_empty_store() {
        let transport = ScriptedTransport::new().respond(json!({
            "products": {"pageInfo": {"endCursor": null, "hasNextPage": false}, "nodes": []}
        }));
        let app: Router = routes().with_state(AppState::new(transport));

        let response = app.oneshot(post_action("actionType=delete")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(
            json,
            json!({"deletedProduct": {"id": "", "handle": ""}, "deletedCount": 0})
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let transport = ScriptedTransport::new()
            .fail(crate::shopify::AdminShopifyError::graphql("Internal error"));
        let app: Router = routes().with_state(AppState::new(transport));

        let response = app.oneshot(post_action("actionType=generate")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
