use std::sync::Arc;

use actix_web::{http::StatusCode, test, web};

use otp_relay::app::create_app;
use otp_relay::dto::{ApiFailure, VerifyOtpResponse};
use otp_relay::routes::AppState;
use otp_relay::verify::MockVerificationProvider;

fn test_state(
    provider: &MockVerificationProvider,
) -> web::Data<AppState<MockVerificationProvider>> {
    web::Data::new(AppState {
        provider: Arc::new(provider.clone()),
        default_country_code: "+91".to_string(),
    })
}

#[actix_web::test]
async fn verify_otp_succeeds_when_the_provider_approves() {
    let provider = MockVerificationProvider::with_status("approved");
    let app = test::init_service(create_app(test_state(&provider))).await;

    let req = test::TestRequest::post()
        .uri("/verify-otp")
        .set_json(serde_json::json!({"phone": "9876543210", "code": "123456"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: VerifyOtpResponse = test::read_body_json(resp).await;
    assert!(body.success);

    assert_eq!(provider.last_recipient().as_deref(), Some("+919876543210"));
    assert_eq!(provider.last_code().as_deref(), Some("123456"));
}

#[actix_web::test]
async fn verify_otp_accepts_a_numeric_code() {
    let provider = MockVerificationProvider::with_status("approved");
    let app = test::init_service(create_app(test_state(&provider))).await;

    let req = test::TestRequest::post()
        .uri("/verify-otp")
        .set_json(serde_json::json!({"phone": "9876543210", "code": 123456}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // Coerced to its decimal string before forwarding
    assert_eq!(provider.last_code().as_deref(), Some("123456"));
}

#[actix_web::test]
async fn verify_otp_rejects_any_status_other_than_approved() {
    for status in ["pending", "canceled", "max_attempts_reached"] {
        let provider = MockVerificationProvider::with_status(status);
        let app = test::init_service(create_app(test_state(&provider))).await;

        let req = test::TestRequest::post()
            .uri("/verify-otp")
            .set_json(serde_json::json!({"phone": "9876543210", "code": "000000"}))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: ApiFailure = test::read_body_json(resp).await;
        assert!(!body.success);
        assert_eq!(body.message, "Invalid OTP");
    }
}

#[actix_web::test]
async fn verify_otp_with_missing_fields_is_rejected_before_the_provider() {
    let provider = MockVerificationProvider::new();
    let app = test::init_service(create_app(test_state(&provider))).await;

    let req = test::TestRequest::post()
        .uri("/verify-otp")
        .set_json(serde_json::json!({"phone": "9876543210"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ApiFailure = test::read_body_json(resp).await;
    assert_eq!(body.message, "Phone and OTP required");
    assert_eq!(provider.call_count(), 0);
}

#[actix_web::test]
async fn verify_otp_with_no_body_is_rejected_before_the_provider() {
    let provider = MockVerificationProvider::new();
    let app = test::init_service(create_app(test_state(&provider))).await;

    let req = test::TestRequest::post().uri("/verify-otp").to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: ApiFailure = test::read_body_json(resp).await;
    assert_eq!(body.message, "Phone and OTP required");
    assert_eq!(provider.call_count(), 0);
}

#[actix_web::test]
async fn verify_otp_surfaces_provider_failures_as_500() {
    let provider = MockVerificationProvider::failing("Authentication Error - invalid username");
    let app = test::init_service(create_app(test_state(&provider))).await;

    let req = test::TestRequest::post()
        .uri("/verify-otp")
        .set_json(serde_json::json!({"phone": "9876543210", "code": "123456"}))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: ApiFailure = test::read_body_json(resp).await;
    assert!(!body.success);
    assert!(body.message.contains("Authentication Error"));
}
