//! The `/app` action endpoint driven through the router.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use serde_json::Value;
use tower::ServiceExt;

use catalog_seeder_admin::routes;
use catalog_seeder_admin::state::AppState;
use catalog_seeder_integration_tests::{CursorMode, FakeCatalog};

fn app(state: &AppState<FakeCatalog>) -> Router {
    routes::routes().with_state(state.clone())
}

fn form_request(method: Method, body: &'static str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri("/app")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

async fn send(state: &AppState<FakeCatalog>, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app(state).oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn send_json(state: &AppState<FakeCatalog>, request: Request<Body>) -> Value {
    let (status, body) = send(state, request).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_health() {
    let state = AppState::new(FakeCatalog::new(CursorMode::Shopify));
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(&state, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"ok");
}

#[tokio::test]
async fn test_generate_returns_created_product() {
    let state = AppState::new(FakeCatalog::new(CursorMode::Shopify));

    let json = send_json(&state, form_request(Method::POST, "actionType=generate")).await;

    let product = &json["product"];
    assert_eq!(product["id"], "gid://shopify/Product/1");
    assert!(product["title"].as_str().unwrap().ends_with(" Snowboard"));
    assert_eq!(product["status"], "ACTIVE");
    let price: f64 = product["variants"][0]["price"].as_str().unwrap().parse().unwrap();
    assert!((0.0..100.0).contains(&price));
    assert_eq!(state.products().transport().len(), 1);
}

#[tokio::test]
async fn test_delete_reports_last_deleted_product() {
    let state = AppState::new(FakeCatalog::with_products(30, CursorMode::Shopify));

    let json = send_json(&state, form_request(Method::POST, "actionType=delete")).await;

    assert_eq!(json["deletedProduct"]["id"], "gid://shopify/Product/30");
    assert_eq!(json["deletedProduct"]["handle"], "snowboard-30");
    assert_eq!(json["deletedCount"], 30);
    assert!(state.products().transport().is_empty());
}

#[tokio::test]
async fn test_delete_via_delete_method() {
    let state = AppState::new(FakeCatalog::with_products(2, CursorMode::Shopify));

    let json = send_json(&state, form_request(Method::DELETE, "actionType=delete")).await;

    assert_eq!(json["deletedCount"], 2);
}

#[tokio::test]
async fn test_delete_on_empty_catalog_returns_empty_signal() {
    let state = AppState::new(FakeCatalog::new(CursorMode::Shopify));

    let json = send_json(&state, form_request(Method::POST, "actionType=delete")).await;

    assert_eq!(json["deletedProduct"]["id"], "");
    assert_eq!(json["deletedProduct"]["handle"], "");
    assert_eq!(json["deletedCount"], 0);
}

#[tokio::test]
async fn test_generate_then_delete() {
    let state = AppState::new(FakeCatalog::new(CursorMode::Shopify));

    let created = send_json(&state, form_request(Method::POST, "actionType=generate")).await;
    let deleted = send_json(&state, form_request(Method::POST, "actionType=delete")).await;

    assert_eq!(deleted["deletedProduct"]["id"], created["product"]["id"]);
    assert_eq!(deleted["deletedProduct"]["handle"], created["product"]["handle"]);
}

#[tokio::test]
async fn test_unknown_action_is_bad_request() {
    let state = AppState::new(FakeCatalog::with_products(3, CursorMode::Shopify));

    let (status, body) = send(&state, form_request(Method::POST, "actionType=publish")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(String::from_utf8(body).unwrap(), "Bad request: unknown action: publish");
    assert!(state.products().transport().operations().is_empty());
}

#[tokio::test]
async fn test_missing_action_is_bad_request() {
    let state = AppState::new(FakeCatalog::new(CursorMode::Shopify));

    let (status, _) = send(&state, form_request(Method::POST, "")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_failed_delete_is_bad_gateway() {
    let catalog = FakeCatalog::with_products(3, CursorMode::Shopify)
        .reject_delete_of("gid://shopify/Product/2");
    let state = AppState::new(catalog);

    let (status, body) = send(&state, form_request(Method::POST, "actionType=delete")).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(String::from_utf8(body).unwrap(), "External service error");
    assert_eq!(state.products().transport().len(), 2);
}
