//! Integration tests for CORS configuration.
//!
//! These tests verify CORS preflight handling for the origin modes the
//! server can run in: an explicit origin list and the wildcard default.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    routing::post,
    Router,
};
use std::time::Duration;
use tower::ServiceExt;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Create a test router with CORS allowing specific origins.
fn test_router_with_specific_origins(allowed: &[&str]) -> Router {
    let origins: Vec<_> = allowed.iter().filter_map(|o| o.parse().ok()).collect();

    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/api/contact", post(|| async { "ok" }))
        .layer(cors)
}

/// Create a test router with CORS allowing all origins.
fn test_router_with_any_origin() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/api/contact", post(|| async { "ok" }))
        .layer(cors)
}

#[tokio::test]
async fn test_cors_preflight_allowed_origin() {
    let app = test_router_with_specific_origins(&["https://example.com"]);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/contact")
                .header(header::ORIGIN, "https://example.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN);
    assert!(
        allow_origin.is_some(),
        "Expected Access-Control-Allow-Origin header"
    );
    assert_eq!(
        allow_origin.unwrap().to_str().unwrap(),
        "https://example.com"
    );
}

#[tokio::test]
async fn test_cors_preflight_disallowed_origin() {
    let app = test_router_with_specific_origins(&["https://example.com"]);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/contact")
                .header(header::ORIGIN, "http://evil.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // tower-http responds without Access-Control-Allow-Origin for
    // disallowed origins; the browser then blocks the request
    let allow_origin = response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN);
    if let Some(origin) = allow_origin {
        assert_ne!(
            origin.to_str().unwrap(),
            "http://evil.com",
            "Should not allow evil.com origin"
        );
    }
}

#[tokio::test]
async fn test_cors_any_origin_allows_all() {
    let app = test_router_with_any_origin();

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/contact")
                .header(header::ORIGIN, "http://any-site.com")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("Expected Access-Control-Allow-Origin header");
    assert_eq!(allow_origin.to_str().unwrap(), "*");
}

#[tokio::test]
async fn test_cors_headers_present_on_actual_request() {
    let app = test_router_with_specific_origins(&["https://example.com"]);

    let response = app
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/api/contact")
                .header(header::ORIGIN, "https://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("Expected Access-Control-Allow-Origin on actual response");
    assert_eq!(allow_origin.to_str().unwrap(), "https://example.com");
}
