//! Credential validation module.
//!
//! Decides accept/reject for a presented bearer credential.
//!
//! # Pre-conditions
//! - None: any string may be presented, including hostile input.
//!
//! # Post-conditions
//! - Returns true only if the signature verifies under the shared secret and
//!   the header algorithm is exactly HS256.
//!
//! # Invariants
//! - Validation is a pure function: no side effects, and the same inputs
//!   always produce the same output.
//! - Malformed or unparseable credentials are invalid, never faults.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use super::token::Claims;

/// Validate a presented credential against the shared secret.
///
/// Verifies the HMAC-SHA256 signature and checks that the header algorithm
/// is exactly HS256; credentials signed under any other algorithm are
/// rejected even if cryptographically valid. Expiry validation is disabled
/// since issued credentials carry no expiry claim.
///
/// # Arguments
/// * `candidate` - The credential string to validate.
/// * `secret` - The shared secret for HMAC-SHA256 verification.
///
/// # Returns
/// True if the credential is authentic, false otherwise.
#[must_use]
pub fn validate_token(candidate: &str, secret: &[u8]) -> bool {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    decode::<Claims>(candidate, &DecodingKey::from_secret(secret), &validation).is_ok()
}

#[cfg(test)]
mod tests {
    use jsonwebtoken::{EncodingKey, Header, encode};

    use super::*;

    const SECRET: &[u8] = b"Horizon Four";
    const FOREIGN_SECRET: &[u8] = b"Chave errada";

    fn create_token(algorithm: Algorithm, secret: &[u8]) -> String {
        create_token_with_date(algorithm, secret, 1_700_000_000_000)
    }

    fn create_token_with_date(algorithm: Algorithm, secret: &[u8], date: i64) -> String {
        let claims = Claims { date };
        let header = Header::new(algorithm);
        encode(&header, &claims, &EncodingKey::from_secret(secret))
            .expect("failed to create test token")
    }

    #[test]
    fn test_validate_accepts_authentic_credential() {
        let token = create_token(Algorithm::HS256, SECRET);

        assert!(validate_token(&token, SECRET));
    }

    #[test]
    fn test_validate_rejects_foreign_secret() {
        let token = create_token(Algorithm::HS256, FOREIGN_SECRET);

        assert!(!validate_token(&token, SECRET));
    }

    #[test]
    fn test_validate_rejects_other_algorithm_under_same_secret() {
        // An HS384 signature over the shared secret verifies cryptographically
        // but the algorithm identifier is not the accepted one.
        let token = create_token(Algorithm::HS384, SECRET);

        assert!(!validate_token(&token, SECRET));
    }

    #[test]
    fn test_validate_rejects_malformed_credential() {
        assert!(!validate_token("not-a-valid-jwt", SECRET));
    }

    #[test]
    fn test_validate_rejects_empty_credential() {
        assert!(!validate_token("", SECRET));
    }

    #[test]
    fn test_validate_rejects_tampered_payload() {
        let token = create_token(Algorithm::HS256, SECRET);
        let mut parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 3);

        // Substitute a payload carrying a different timestamp, keeping the
        // original signature.
        let other = create_token_with_date(Algorithm::HS256, SECRET, 1_700_000_099_999);
        let other_payload = other.split('.').nth(1).expect("payload segment");
        parts[1] = other_payload;
        let tampered = parts.join(".");

        assert!(!validate_token(&tampered, SECRET));
    }

    #[test]
    fn test_validate_is_idempotent() {
        let token = create_token(Algorithm::HS256, SECRET);

        let first = validate_token(&token, SECRET);
        let second = validate_token(&token, SECRET);

        assert_eq!(first, second);
        assert!(first);
    }
}
