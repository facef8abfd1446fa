pub mod health;
pub mod send_otp;
pub mod verify_otp;

use std::sync::Arc;

use crate::verify::VerificationProvider;

/// Shared application state injected into every handler.
///
/// The provider handle is created once at startup and treated as
/// read-only; handlers never mutate it.
pub struct AppState<P: VerificationProvider> {
    pub provider: Arc<P>,
    /// Country calling code used when normalizing local numbers
    pub default_country_code: String,
}
