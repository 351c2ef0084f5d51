//! Token issuance module.
//!
//! Produces signed bearer credentials using HMAC-SHA256 over a shared secret.
//!
//! # Pre-conditions
//! - The shared secret must be non-empty (enforced at configuration load).
//!
//! # Post-conditions
//! - On success, returns a compact JWT whose single claim is the issuance
//!   timestamp and whose header algorithm is exactly HS256.
//!
//! # Invariants
//! - The algorithm is pinned to HS256 at issuance; the header never carries
//!   any other identifier.
//! - Issuance reads the system clock and has no other side effects.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

/// Claims carried by an issued credential.
///
/// The credential binds a single field: the issuance timestamp in integer
/// milliseconds since the Unix epoch. No expiry, audience, or issuer claim
/// is modeled.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Claims {
    /// Issuance timestamp in milliseconds since the Unix epoch.
    pub date: i64,
}

/// Error returned when token issuance fails.
///
/// Issuance failures are implementation faults, not client errors.
#[derive(Debug)]
pub enum TokenError {
    /// The system clock is unusable (before the Unix epoch, or the
    /// millisecond count does not fit the claim's integer type).
    Clock,
    /// The signing primitive failed.
    Signing(String),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clock => write!(f, "system clock is unusable for token issuance"),
            Self::Signing(reason) => write!(f, "token signing failed: {reason}"),
        }
    }
}

impl std::error::Error for TokenError {}

/// Issue a signed credential encoding the current issuance timestamp.
///
/// # Arguments
/// * `secret` - The shared secret used for HMAC-SHA256 signing.
///
/// # Returns
/// A compact JWT string on success.
///
/// # Errors
/// Returns `TokenError` if the clock is unusable or signing fails.
pub fn issue_token(secret: &[u8]) -> Result<String, TokenError> {
    let claims = Claims {
        date: current_timestamp_ms()?,
    };

    let header = Header::new(Algorithm::HS256);
    encode(&header, &claims, &EncodingKey::from_secret(secret))
        .map_err(|error| TokenError::Signing(error.to_string()))
}

/// Read the current time as milliseconds since the Unix epoch.
fn current_timestamp_ms() -> Result<i64, TokenError> {
    let elapsed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TokenError::Clock)?;

    i64::try_from(elapsed.as_millis()).map_err(|_| TokenError::Clock)
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{DecodingKey, Validation, decode, decode_header};

    use super::*;

    const SECRET: &[u8] = b"Horizon Four";

    fn decode_claims(token: &str, secret: &[u8]) -> Claims {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)
            .expect("token should decode")
            .claims
    }

    #[test]
    fn test_issue_token_produces_decodable_credential() {
        let token = issue_token(SECRET).expect("issuance should succeed");

        let claims = decode_claims(&token, SECRET);
        assert!(claims.date > 0);
    }

    #[test]
    fn test_issue_token_pins_hs256_in_header() {
        let token = issue_token(SECRET).expect("issuance should succeed");

        let header = decode_header(&token).expect("header should decode");
        assert_eq!(header.alg, Algorithm::HS256);
    }

    #[test]
    fn test_issue_token_timestamp_is_current() {
        let before = current_timestamp_ms().expect("clock should be usable");
        let token = issue_token(SECRET).expect("issuance should succeed");
        let after = current_timestamp_ms().expect("clock should be usable");

        let claims = decode_claims(&token, SECRET);
        assert!(claims.date >= before);
        assert!(claims.date <= after);
    }

    #[test]
    fn test_issue_token_twice_produces_distinct_credentials() {
        let first = issue_token(SECRET).expect("issuance should succeed");
        // The timestamp claim has millisecond resolution; step past it.
        std::thread::sleep(std::time::Duration::from_millis(2));
        let second = issue_token(SECRET).expect("issuance should succeed");

        assert_ne!(first, second);
    }

    #[test]
    fn test_issue_token_with_empty_secret_still_signs() {
        // The issuer itself does not police the secret; non-emptiness is a
        // configuration invariant enforced at load time.
        let result = issue_token(b"");
        assert!(result.is_ok());
    }
}
