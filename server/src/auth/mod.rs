//! Authentication module.
//!
//! This module provides token issuance and credential validation for the
//! greeter server: a single shared secret signs and verifies compact JWTs
//! carrying an issuance timestamp.
//!
//! # Pre-conditions
//! - The shared secret is fixed at startup and non-empty.
//!
//! # Post-conditions
//! - Issued credentials validate as authentic under the same secret.
//!
//! # Invariants
//! - The HS256 algorithm identifier is pinned on both the issue and the
//!   verify side.

pub mod token;
pub mod validate;

pub use token::{TokenError, issue_token};
pub use validate::validate_token;
