//! Common helpers for end-to-end tests.

use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use tower::ServiceExt;

use crate::config::ServerConfig;
use crate::server::{self, TokenResponse};

/// Shared secret the test router is configured with.
pub const TEST_SECRET: &[u8] = b"Horizon Four";

/// In-process test server driving the router without a network listener.
pub struct TestServer {
    router: Router,
}

impl TestServer {
    /// Create a test server with a fresh router over the test secret.
    #[must_use]
    pub fn new() -> Self {
        let config = ServerConfig {
            token_secret: TEST_SECRET.to_vec(),
            listen_port: 0,
        };

        Self {
            router: server::app(&config),
        }
    }

    /// Request a credential from the ungated token route.
    pub async fn get_token(&self) -> Response<Body> {
        let request = Request::builder()
            .method("GET")
            .uri("/token")
            .body(Body::empty())
            .expect("request should build");

        self.send(request).await
    }

    /// Request a credential and extract it from the response body.
    pub async fn issued_token(&self) -> String {
        let response = self.get_token().await;
        assert!(response.status().is_success());

        let body = body_string(response).await;
        let parsed: TokenResponse =
            serde_json::from_str(&body).expect("token response should parse");
        parsed.token
    }

    /// Post a JSON body to the gated greeting route.
    ///
    /// `credential` is placed verbatim in the `Authorization` header when
    /// present; callers choose the raw or `Bearer `-prefixed form.
    pub async fn post_hello(&self, body: &str, credential: Option<&str>) -> Response<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri("/hello")
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(credential) = credential {
            builder = builder.header(header::AUTHORIZATION, credential);
        }

        let request = builder
            .body(Body::from(body.to_owned()))
            .expect("request should build");

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("router should be infallible")
    }
}

/// Read a full response body as a UTF-8 string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");

    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}
