//! Server configuration module.
//!
//! This module provides configuration loading for the greeter server from
//! environment variables.
//!
//! # Environment Variables
//!
//! - `GREETER_TOKEN_SECRET`: Shared secret for signing and verifying
//!   credentials (default: `Horizon Four`)
//! - `GREETER_LISTEN_PORT`: Port to listen on (default: `8000`)
//!
//! # Invariants
//!
//! - `token_secret` is never empty
//! - `listen_port` is always a valid port number (1-65535)

/// Server configuration.
///
/// Contains all configuration parameters needed to run the greeter server.
/// Assembled once at startup and immutable afterwards; the router and the
/// self-check both read from it.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Shared secret used symmetrically for signing and verifying
    /// credentials. No rotation, no versioning.
    pub token_secret: Vec<u8>,
    /// Port to listen on for HTTP connections.
    pub listen_port: u16,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl ServerConfig {
    /// Default port for the server.
    pub const DEFAULT_PORT: u16 = 8000;
    /// Default shared secret, matching the demo constant.
    pub const DEFAULT_TOKEN_SECRET: &'static str = "Horizon Four";

    /// Load configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `GREETER_TOKEN_SECRET`: Shared secret (default: `Horizon Four`)
    /// - `GREETER_LISTEN_PORT`: Listen port (default: `8000`)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `GREETER_TOKEN_SECRET` is set but empty
    /// - `GREETER_LISTEN_PORT` is set but not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        let token_secret = Self::load_token_secret()?;
        let listen_port = Self::load_listen_port()?;

        Ok(Self {
            token_secret,
            listen_port,
        })
    }

    /// Load the shared secret from environment.
    ///
    /// Returns the default if not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is set but empty.
    fn load_token_secret() -> Result<Vec<u8>, ConfigError> {
        match std::env::var("GREETER_TOKEN_SECRET") {
            Ok(value) => {
                if value.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        name: "GREETER_TOKEN_SECRET".to_string(),
                        message: "must not be empty".to_string(),
                    });
                }
                Ok(value.into_bytes())
            }
            Err(_) => Ok(Self::DEFAULT_TOKEN_SECRET.as_bytes().to_vec()),
        }
    }

    /// Load the listen port from environment.
    ///
    /// Returns the default if not set.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is set but not a valid port number.
    fn load_listen_port() -> Result<u16, ConfigError> {
        match std::env::var("GREETER_LISTEN_PORT") {
            Ok(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: "GREETER_LISTEN_PORT".to_string(),
                message: format!("'{value}' is not a valid port number (must be 1-65535)"),
            }),
            Err(_) => Ok(Self::DEFAULT_PORT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(ServerConfig::DEFAULT_PORT, 8000);
        assert_eq!(ServerConfig::DEFAULT_TOKEN_SECRET, "Horizon Four");
    }

    #[test]
    fn test_config_error_display_invalid() {
        let error = ConfigError::InvalidValue {
            name: "TEST_VAR".to_string(),
            message: "bad value".to_string(),
        };
        assert_eq!(error.to_string(), "invalid value for TEST_VAR: bad value");
    }
}
