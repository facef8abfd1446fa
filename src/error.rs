//! Error types for the relay.

use thiserror::Error;

/// Errors surfaced by the verification provider or its transport.
///
/// The display text of these variants is what ends up in the `message`
/// field of a 500 response, so it stays close to the underlying error.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure talking to the provider
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-success HTTP status; carries
    /// the provider's human-readable error text (the status itself is
    /// logged at the call site, not surfaced to callers)
    #[error("{0}")]
    Api(String),
}

/// Configuration error raised at startup.
#[derive(Debug, Error)]
#[error("Configuration error: {0}")]
pub struct ConfigError(String);

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}
