//! Test that credentials signed with a foreign secret are rejected.

use axum::http::StatusCode;

use crate::auth;
use crate::e2e_tests::helpers::TestServer;

#[tokio::test]
async fn test_greet_rejects_foreign_signed_credential() {
    let server = TestServer::new();
    let foreign = auth::issue_token(b"Chave errada").expect("issuance should succeed");

    let response = server
        .post_hello(r#"{"name":"Horizon Four"}"#, Some(&foreign))
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_greet_rejects_foreign_credential_regardless_of_payload() {
    let server = TestServer::new();
    let foreign = auth::issue_token(b"Chave errada").expect("issuance should succeed");

    // The payload shape is irrelevant; the gate rejects before payload
    // validation runs.
    let response = server.post_hello("not even json", Some(&foreign)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
