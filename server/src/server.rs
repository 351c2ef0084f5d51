//! Route dispatcher module.
//!
//! Assembles the HTTP router from an immutable configuration object: two
//! routes, with the credential validator applied as a middleware gate in
//! front of `/hello`. `/token` is the only ungated route, by design.
//!
//! # Invariants
//! - A request that fails the auth gate never reaches a handler.
//! - The shared secret in the router state is read-only after startup.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{StatusCode, header::AUTHORIZATION},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::auth::{self, TokenError};
use crate::config::ServerConfig;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared secret for signing and verifying credentials.
    token_secret: Arc<Vec<u8>>,
}

/// Request payload for the `/hello` route.
///
/// `name` must be present and must be a string; it may be empty. Bodies
/// that do not match this shape are rejected by payload validation before
/// the handler runs.
#[derive(Debug, Deserialize)]
pub struct GreetRequest {
    name: String,
}

/// Response payload for the `/token` route.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// A freshly issued credential.
    pub token: String,
}

/// Error surfaced to clients as a generic server fault.
///
/// The wrapped cause is logged for operator visibility; the response body
/// carries no internal detail.
#[derive(Debug)]
pub struct ServerError(TokenError);

impl From<TokenError> for ServerError {
    fn from(error: TokenError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        tracing::error!("token issuance failed: {}", self.0);
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

/// Build the application router.
///
/// Every route is gated behind the credential validator except those
/// explicitly registered as ungated (`/token`).
#[must_use]
pub fn app(config: &ServerConfig) -> Router {
    let state = AppState {
        token_secret: Arc::new(config.token_secret.clone()),
    };

    let gated = Router::new()
        .route("/hello", post(greet))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_credential,
        ));

    Router::new()
        .route("/token", get(token))
        .merge(gated)
        .with_state(state)
}

/// Middleware gate: reject the request unless it carries a valid credential.
///
/// The credential is read from the standard `Authorization` header. Clients
/// may send the raw token or the `Bearer <token>` form. An absent header,
/// a non-UTF-8 header value, or a credential that fails validation all
/// terminate the request with `401` before the handler is invoked.
async fn require_credential(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(strip_bearer_scheme)
        .is_some_and(|candidate| auth::validate_token(candidate, &state.token_secret));

    if authorized {
        next.run(request).await
    } else {
        (
            StatusCode::UNAUTHORIZED,
            "missing or invalid authentication token",
        )
            .into_response()
    }
}

/// Strip the optional `Bearer ` scheme prefix from an authorization value.
fn strip_bearer_scheme(value: &str) -> &str {
    value.strip_prefix("Bearer ").unwrap_or(value)
}

/// A simple route to say hello.
///
/// Returns a simple Hello message for the authenticated caller.
async fn greet(Json(request): Json<GreetRequest>) -> String {
    format!("Hello {}", request.name)
}

/// A route to get a token.
///
/// Returns a valid token to use against the gated routes.
async fn token(State(state): State<AppState>) -> Result<Json<TokenResponse>, ServerError> {
    let token = auth::issue_token(&state.token_secret)?;
    Ok(Json(TokenResponse { token }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_bearer_scheme_with_prefix() {
        assert_eq!(strip_bearer_scheme("Bearer abc.def.ghi"), "abc.def.ghi");
    }

    #[test]
    fn test_strip_bearer_scheme_raw_token() {
        assert_eq!(strip_bearer_scheme("abc.def.ghi"), "abc.def.ghi");
    }

    #[test]
    fn test_strip_bearer_scheme_prefix_only_once() {
        assert_eq!(strip_bearer_scheme("Bearer Bearer x"), "Bearer x");
    }
}
