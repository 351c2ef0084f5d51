//! Test that malformed credentials are rejected, not treated as faults.

use axum::http::StatusCode;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

use crate::auth::token::Claims;
use crate::e2e_tests::helpers::{TEST_SECRET, TestServer};

#[tokio::test]
async fn test_greet_rejects_garbage_credential() {
    let server = TestServer::new();

    let response = server
        .post_hello(r#"{"name":"X"}"#, Some("not-a-valid-jwt"))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_greet_rejects_empty_credential() {
    let server = TestServer::new();

    let response = server.post_hello(r#"{"name":"X"}"#, Some("")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_greet_rejects_credential_under_other_algorithm() {
    let server = TestServer::new();

    // Signed over the right secret, but not under the accepted algorithm.
    let claims = Claims {
        date: 1_700_000_000_000,
    };
    let header = Header::new(Algorithm::HS384);
    let token = encode(&header, &claims, &EncodingKey::from_secret(TEST_SECRET))
        .expect("failed to create test token");

    let response = server.post_hello(r#"{"name":"X"}"#, Some(&token)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_greet_rejects_truncated_credential() {
    let server = TestServer::new();
    let token = server.issued_token().await;
    let truncated = &token[..token.len() - 4];

    let response = server.post_hello(r#"{"name":"X"}"#, Some(truncated)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
