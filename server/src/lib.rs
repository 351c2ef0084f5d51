// Life of a request:
// 1. JSON comes in over HTTP
// 2. The auth gate validates the bearer credential on gated routes
// 3. For /token:
//     - Sign a fresh credential over the shared secret
//     - Respond with JSON
//    For /hello:
//     - Validate the payload shape
//     - Respond with plain text
//
// System components:
//  - Token issuer and credential validator
//  - Route dispatcher with the auth gate
//  - Startup self-check

pub mod auth;
pub mod config;
mod e2e_tests;
pub mod selfcheck;
pub mod server;
