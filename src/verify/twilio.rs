//! Twilio Verify v2 client.
//!
//! Talks to the Verify REST API directly over `reqwest`. The relay
//! needs the Verifications and VerificationCheck resources, which the
//! messaging-oriented Twilio SDKs do not cover, so the two calls are
//! issued as plain form-encoded POSTs with HTTP basic auth.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info};
use serde::Deserialize;

use super::VerificationProvider;
use crate::config::TwilioConfig;
use crate::error::ProviderError;
use crate::phone::mask;

const DEFAULT_BASE_URL: &str = "https://verify.twilio.com/v2";
const SMS_CHANNEL: &str = "sms";

/// Production verification provider backed by Twilio Verify.
pub struct TwilioVerifyClient {
    http: reqwest::Client,
    config: TwilioConfig,
    base_url: String,
}

/// The slice of a Verification / VerificationCheck resource the relay
/// cares about.
#[derive(Debug, Deserialize)]
struct VerificationResource {
    status: String,
}

/// Error body returned by the Twilio API on non-2xx responses.
#[derive(Debug, Deserialize)]
struct TwilioApiError {
    message: String,
}

impl TwilioVerifyClient {
    pub fn new(config: TwilioConfig) -> Result<Self, ProviderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            "Twilio Verify client initialized for service {}",
            config.verify_service_sid
        );

        Ok(Self {
            http,
            config,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API root. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn post_form(
        &self,
        resource: &str,
        params: &[(&str, &str)],
    ) -> Result<String, ProviderError> {
        let url = format!(
            "{}/Services/{}/{}",
            self.base_url, self.config.verify_service_sid, resource
        );

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(params)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let resource: VerificationResource = response.json().await?;
            Ok(resource.status)
        } else {
            let body = response.text().await?;
            // Twilio error bodies are JSON with a human-readable
            // `message`; fall back to the raw body if parsing fails.
            let message = serde_json::from_str::<TwilioApiError>(&body)
                .map(|e| e.message)
                .unwrap_or(body);
            error!(
                "Twilio API returned {} for {}: {}",
                status.as_u16(),
                resource,
                message
            );
            Err(ProviderError::Api(message))
        }
    }
}

#[async_trait]
impl VerificationProvider for TwilioVerifyClient {
    async fn start_verification(&self, to: &str) -> Result<String, ProviderError> {
        debug!("Starting verification for {}", mask(to));

        let status = self
            .post_form("Verifications", &[("To", to), ("Channel", SMS_CHANNEL)])
            .await?;

        info!("Verification started for {}: status={}", mask(to), status);
        Ok(status)
    }

    async fn check_verification(&self, to: &str, code: &str) -> Result<String, ProviderError> {
        debug!("Checking verification code for {}", mask(to));

        let status = self
            .post_form("VerificationCheck", &[("To", to), ("Code", code)])
            .await?;

        info!("Verification check for {}: status={}", mask(to), status);
        Ok(status)
    }

    fn provider_name(&self) -> &str {
        "Twilio Verify"
    }
}
