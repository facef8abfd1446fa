//! Verification provider integrations.
//!
//! The relay delegates all OTP state to an external provider: the
//! provider generates and delivers the code, tracks expiry and attempt
//! counts, and judges submitted codes. This module defines the trait
//! seam plus the production Twilio Verify client and a mock for tests.

use async_trait::async_trait;

use crate::error::ProviderError;

pub mod mock;
pub mod twilio;

pub use mock::MockVerificationProvider;
pub use twilio::TwilioVerifyClient;

/// The provider status string that marks a submitted code as accepted.
/// Every other status is treated as a rejection.
pub const STATUS_APPROVED: &str = "approved";

/// A provider that can start and check phone verifications.
#[async_trait]
pub trait VerificationProvider: Send + Sync {
    /// Ask the provider to generate a code and deliver it to `to` over
    /// SMS. Returns the provider's status string for the new
    /// verification (normally `"pending"`).
    async fn start_verification(&self, to: &str) -> Result<String, ProviderError>;

    /// Submit a code for checking. Returns the provider's status
    /// string; [`STATUS_APPROVED`] is the sole success signal.
    async fn check_verification(&self, to: &str, code: &str) -> Result<String, ProviderError>;

    /// Name of the provider, for log output.
    fn provider_name(&self) -> &str;
}
