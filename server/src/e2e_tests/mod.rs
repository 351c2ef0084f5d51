//! End-to-end tests at the HTTP request/response level.
//!
//! Each test file covers a specific scenario, driving the full router
//! through the auth gate with in-process requests.

#![cfg(test)]

mod helpers;

mod test_greet_authorized;
mod test_greet_malformed_credential;
mod test_greet_missing_credential;
mod test_greet_payload_validation;
mod test_greet_wrong_secret;
mod test_token_route;
