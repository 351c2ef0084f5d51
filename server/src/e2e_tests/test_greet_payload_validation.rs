//! Test payload validation on the greeting route.
//!
//! Payload validation runs only after the auth gate accepts the credential;
//! a well-formed credential with a malformed body is a client error, not an
//! authentication failure.

use axum::http::StatusCode;

use crate::e2e_tests::helpers::TestServer;

#[tokio::test]
async fn test_greet_rejects_missing_name() {
    let server = TestServer::new();
    let token = server.issued_token().await;

    let response = server.post_hello("{}", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_greet_rejects_non_string_name() {
    let server = TestServer::new();
    let token = server.issued_token().await;

    let response = server.post_hello(r#"{"name":42}"#, Some(&token)).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_greet_rejects_invalid_json() {
    let server = TestServer::new();
    let token = server.issued_token().await;

    let response = server.post_hello("{not json", Some(&token)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
