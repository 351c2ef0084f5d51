//! Test the ungated token route.

use axum::http::{StatusCode, header};

use crate::auth;
use crate::e2e_tests::helpers::{TEST_SECRET, TestServer, body_string};

#[tokio::test]
async fn test_token_route_returns_json_credential() {
    let server = TestServer::new();

    let response = server.get_token().await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(content_type.starts_with("application/json"));

    let body = body_string(response).await;
    let parsed: serde_json::Value = serde_json::from_str(&body).expect("body should be JSON");
    assert!(parsed["token"].is_string());
}

#[tokio::test]
async fn test_issued_credential_validates_against_shared_secret() {
    let server = TestServer::new();

    let token = server.issued_token().await;

    assert!(auth::validate_token(&token, TEST_SECRET));
    assert!(!auth::validate_token(&token, b"Chave errada"));
}

#[tokio::test]
async fn test_token_route_issues_distinct_credentials() {
    let server = TestServer::new();

    let first = server.issued_token().await;
    // The timestamp claim has millisecond resolution; step past it.
    tokio::time::sleep(std::time::Duration::from_millis(2)).await;
    let second = server.issued_token().await;

    assert_ne!(first, second);
    assert!(auth::validate_token(&first, TEST_SECRET));
    assert!(auth::validate_token(&second, TEST_SECRET));
}
