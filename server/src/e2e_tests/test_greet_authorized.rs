//! Test the greeting route with valid credentials.

use axum::http::StatusCode;

use crate::e2e_tests::helpers::{TestServer, body_string};

#[tokio::test]
async fn test_greet_with_issued_credential() {
    let server = TestServer::new();
    let token = server.issued_token().await;

    let response = server
        .post_hello(r#"{"name":"Horizon Four"}"#, Some(&token))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Hello Horizon Four");
}

#[tokio::test]
async fn test_greet_accepts_bearer_prefixed_credential() {
    let server = TestServer::new();
    let token = server.issued_token().await;
    let prefixed = format!("Bearer {token}");

    let response = server
        .post_hello(r#"{"name":"Horizon Four"}"#, Some(&prefixed))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Hello Horizon Four");
}

#[tokio::test]
async fn test_greet_with_empty_name() {
    let server = TestServer::new();
    let token = server.issued_token().await;

    let response = server.post_hello(r#"{"name":""}"#, Some(&token)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Hello ");
}

#[tokio::test]
async fn test_greet_echoes_arbitrary_names() {
    let server = TestServer::new();
    let token = server.issued_token().await;

    let response = server
        .post_hello(r#"{"name":"Chave errada"}"#, Some(&token))
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Hello Chave errada");
}

#[tokio::test]
async fn test_same_credential_works_for_multiple_requests() {
    let server = TestServer::new();
    let token = server.issued_token().await;

    for _ in 0..3 {
        let response = server.post_hello(r#"{"name":"again"}"#, Some(&token)).await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
