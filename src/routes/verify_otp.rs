use actix_web::{web, HttpResponse};
use log::{error, info, warn};

use super::AppState;
use crate::dto::{ApiFailure, VerifyOtpRequest, VerifyOtpResponse};
use crate::phone::{mask, normalize};
use crate::verify::{VerificationProvider, STATUS_APPROVED};

/// Handler for `POST /verify-otp`
///
/// Submits a code to the provider for checking. The provider's status
/// string decides the outcome: exactly `"approved"` is a success, any
/// other status is a rejected code.
///
/// # Request Body
///
/// ```json
/// { "phone": "9876543210", "code": "123456" }
/// ```
///
/// The code may also arrive as a bare JSON number; it is coerced to a
/// string before forwarding.
///
/// # Responses
///
/// - 200 `{"success": true}` — code accepted by the provider
/// - 400 `{"success": false, "message": "Phone and OTP required"}` —
///   missing fields; the provider is not called
/// - 400 `{"success": false, "message": "Invalid OTP"}` — code
///   rejected (wrong, expired, or too many attempts)
/// - 500 `{"success": false, "message": "..."}` — provider or transport
///   failure, with the underlying error text
pub async fn verify_otp<P>(
    state: web::Data<AppState<P>>,
    request: Option<web::Json<VerifyOtpRequest>>,
) -> HttpResponse
where
    P: VerificationProvider + 'static,
{
    let request = request.map(web::Json::into_inner).unwrap_or_default();

    let (phone, code) = match (
        request.phone.as_deref().map(str::trim),
        request.code.as_deref().map(str::trim),
    ) {
        (Some(phone), Some(code)) if !phone.is_empty() && !code.is_empty() => {
            (phone.to_string(), code.to_string())
        }
        _ => {
            warn!("verify-otp request rejected: missing phone or code");
            return HttpResponse::BadRequest().json(ApiFailure::new("Phone and OTP required"));
        }
    };

    let phone = normalize(&phone, &state.default_country_code);

    info!("Checking OTP for {}", mask(&phone));

    match state.provider.check_verification(&phone, &code).await {
        Ok(status) if status == STATUS_APPROVED => {
            info!("OTP approved for {}", mask(&phone));
            HttpResponse::Ok().json(VerifyOtpResponse { success: true })
        }
        Ok(status) => {
            warn!("OTP rejected for {}: status={}", mask(&phone), status);
            HttpResponse::BadRequest().json(ApiFailure::new("Invalid OTP"))
        }
        Err(e) => {
            error!("Failed to check OTP for {}: {}", mask(&phone), e);
            HttpResponse::InternalServerError().json(ApiFailure::new(e.to_string()))
        }
    }
}
