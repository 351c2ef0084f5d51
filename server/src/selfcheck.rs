//! Startup self-check.
//!
//! On process start, issues one valid and one foreign-signed credential and
//! exercises the gated route with each, in-process, logging both outcomes.
//! The probes never leave the process; they drive the router directly.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use tower::ServiceExt;

use crate::auth::{self, TokenError};
use crate::config::ServerConfig;

/// Probe payload, mirroring a typical client request.
const PROBE_BODY: &str = r#"{"name":"Horizon Four"}"#;

/// Secret used to sign the deliberately rejected probe credential.
const FOREIGN_SECRET: &[u8] = b"Chave errada";

/// Upper bound on probe response bodies read into memory.
const MAX_PROBE_BODY_BYTES: usize = 1024;

/// Error returned when the self-check itself cannot execute.
///
/// An unexpected probe outcome is not an error; it is logged as a warning.
#[derive(Debug)]
pub enum SelfCheckError {
    /// Issuing a probe credential failed.
    Issue(TokenError),
    /// Building or sending a probe request failed.
    Request(String),
}

impl std::fmt::Display for SelfCheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Issue(error) => write!(f, "failed to issue probe credential: {error}"),
            Self::Request(reason) => write!(f, "failed to execute probe request: {reason}"),
        }
    }
}

impl std::error::Error for SelfCheckError {}

/// Run the startup self-check against the assembled router.
///
/// Fires two probes at the gated route: one carrying a credential signed
/// with the configured secret (expected to be accepted) and one signed with
/// a foreign secret (expected to be rejected). Each outcome is logged.
///
/// # Errors
///
/// Returns an error only if a probe could not be executed at all; an
/// unexpected status is logged, not returned.
pub async fn run(router: &Router, config: &ServerConfig) -> Result<(), SelfCheckError> {
    let valid = auth::issue_token(&config.token_secret).map_err(SelfCheckError::Issue)?;
    let foreign = auth::issue_token(FOREIGN_SECRET).map_err(SelfCheckError::Issue)?;

    let (status, body) = probe(router.clone(), &valid).await?;
    log_outcome("valid credential", status, &body, StatusCode::OK);

    let (status, body) = probe(router.clone(), &foreign).await?;
    log_outcome("foreign credential", status, &body, StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Send one probe request through the router and collect its outcome.
async fn probe(router: Router, credential: &str) -> Result<(StatusCode, String), SelfCheckError> {
    // Clients of the original demo send the raw token without a scheme
    // prefix; the probe does the same.
    let request = Request::builder()
        .method("POST")
        .uri("/hello")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, credential)
        .body(Body::from(PROBE_BODY))
        .map_err(|error| SelfCheckError::Request(error.to_string()))?;

    let response = match router.oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), MAX_PROBE_BODY_BYTES)
        .await
        .map_err(|error| SelfCheckError::Request(error.to_string()))?;
    let body = String::from_utf8_lossy(&bytes).into_owned();

    Ok((status, body))
}

/// Log one probe outcome, warning when the status is not the expected one.
fn log_outcome(label: &str, status: StatusCode, body: &str, expected: StatusCode) {
    if status == expected {
        tracing::info!("self-check: {label} probe returned {status}: {body:?}");
    } else {
        tracing::warn!(
            "self-check: {label} probe returned {status} (expected {expected}): {body:?}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server;

    fn test_config() -> ServerConfig {
        ServerConfig {
            token_secret: b"Horizon Four".to_vec(),
            listen_port: 0,
        }
    }

    #[tokio::test]
    async fn test_self_check_executes_cleanly() {
        let config = test_config();
        let router = server::app(&config);

        let result = run(&router, &config).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_probe_outcomes_match_expectations() {
        let config = test_config();
        let router = server::app(&config);

        let valid = auth::issue_token(&config.token_secret).expect("issuance should succeed");
        let (status, body) = probe(router.clone(), &valid).await.expect("probe runs");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello Horizon Four");

        let foreign = auth::issue_token(FOREIGN_SECRET).expect("issuance should succeed");
        let (status, _) = probe(router, &foreign).await.expect("probe runs");
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }
}
