//! Environment-sourced configuration.
//!
//! Everything is read from the process environment (a `.env` file is
//! loaded by the binary before this runs). Provider credentials are the
//! only hard requirement; the rest falls back to sensible defaults.

use std::env;

use crate::error::ConfigError;

/// HTTP listener configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listener port
    pub port: u16,
}

impl ServerConfig {
    /// Load from `SERVER_HOST` / `SERVER_PORT`, defaulting to `0.0.0.0:3000`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("SERVER_PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| ConfigError::new("SERVER_PORT must be a valid port number"))?,
            Err(_) => 3000,
        };

        Ok(Self { host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Twilio Verify credentials and client settings.
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// Verify service SID identifying the verification flow to use
    pub verify_service_sid: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TwilioConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let account_sid = env::var("TWILIO_ACCOUNT_SID")
            .map_err(|_| ConfigError::new("TWILIO_ACCOUNT_SID not set"))?;
        let auth_token = env::var("TWILIO_AUTH_TOKEN")
            .map_err(|_| ConfigError::new("TWILIO_AUTH_TOKEN not set"))?;
        let verify_service_sid = env::var("TWILIO_VERIFY_SERVICE_SID")
            .map_err(|_| ConfigError::new("TWILIO_VERIFY_SERVICE_SID not set"))?;

        Ok(Self {
            account_sid,
            auth_token,
            verify_service_sid,
            request_timeout_secs: env::var("TWILIO_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Top-level relay configuration.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub server: ServerConfig,
    pub twilio: TwilioConfig,
    /// Country calling code prepended to numbers without a `+` prefix
    pub default_country_code: String,
}

impl RelayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let default_country_code =
            env::var("DEFAULT_COUNTRY_CODE").unwrap_or_else(|_| "+91".to_string());
        if !default_country_code.starts_with('+') {
            return Err(ConfigError::new(
                "DEFAULT_COUNTRY_CODE must start with '+' (e.g. +91)",
            ));
        }

        Ok(Self {
            server: ServerConfig::from_env()?,
            twilio: TwilioConfig::from_env()?,
            default_country_code,
        })
    }
}
