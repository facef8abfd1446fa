//! Application factory.
//!
//! Builds the Actix-web application from shared state so the binary
//! and the route tests compose the exact same app.

use actix_web::{middleware::Logger, web, App, HttpResponse};

use crate::middleware::cors::create_cors;
use crate::routes::{health::health_check, send_otp::send_otp, verify_otp::verify_otp, AppState};
use crate::verify::VerificationProvider;

/// Create and configure the application with all routes and middleware.
pub fn create_app<P>(
    app_state: web::Data<AppState<P>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: VerificationProvider + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(Logger::default())
        .wrap(create_cors())
        .route("/", web::get().to(health_check))
        .route("/send-otp", web::post().to(send_otp::<P>))
        .route("/verify-otp", web::post().to(verify_otp::<P>))
        .default_service(web::route().to(|| async {
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "message": "The requested resource was not found"
            }))
        }))
}
