//! Test that requests without a credential are rejected.

use axum::http::StatusCode;

use crate::e2e_tests::helpers::{TestServer, body_string};

#[tokio::test]
async fn test_greet_rejects_absent_credential() {
    let server = TestServer::new();

    let response = server.post_hello(r#"{"name":"X"}"#, None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_string(response).await,
        "missing or invalid authentication token"
    );
}

#[tokio::test]
async fn test_token_route_needs_no_credential() {
    let server = TestServer::new();

    let response = server.get_token().await;

    assert_eq!(response.status(), StatusCode::OK);
}
