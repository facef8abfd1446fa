use actix_web::{web, HttpResponse};
use log::{error, info, warn};

use super::AppState;
use crate::dto::{ApiFailure, SendOtpRequest, SendOtpResponse};
use crate::phone::{mask, normalize};
use crate::verify::VerificationProvider;

/// Handler for `POST /send-otp`
///
/// Asks the provider to deliver a verification code to the given phone
/// number over SMS.
///
/// # Request Body
///
/// ```json
/// { "phone": "9876543210" }
/// ```
///
/// # Responses
///
/// - 200 `{"success": true, "status": "pending"}` — verification started
/// - 400 `{"success": false, "message": "Phone required"}` — phone
///   missing or empty; the provider is not called
/// - 500 `{"success": false, "message": "..."}` — provider or transport
///   failure, with the underlying error text
pub async fn send_otp<P>(
    state: web::Data<AppState<P>>,
    request: Option<web::Json<SendOtpRequest>>,
) -> HttpResponse
where
    P: VerificationProvider + 'static,
{
    let request = request.map(web::Json::into_inner).unwrap_or_default();

    let phone = match request.phone.as_deref().map(str::trim) {
        Some(phone) if !phone.is_empty() => phone.to_string(),
        _ => {
            warn!("send-otp request rejected: missing phone");
            return HttpResponse::BadRequest().json(ApiFailure::new("Phone required"));
        }
    };

    let phone = normalize(&phone, &state.default_country_code);

    info!(
        "Sending OTP to {} via {}",
        mask(&phone),
        state.provider.provider_name()
    );

    match state.provider.start_verification(&phone).await {
        Ok(status) => HttpResponse::Ok().json(SendOtpResponse {
            success: true,
            status,
        }),
        Err(e) => {
            error!("Failed to send OTP to {}: {}", mask(&phone), e);
            HttpResponse::InternalServerError().json(ApiFailure::new(e.to_string()))
        }
    }
}
