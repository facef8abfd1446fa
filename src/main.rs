use std::io;
use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenv::dotenv;
use log::info;

use otp_relay::app::create_app;
use otp_relay::config::RelayConfig;
use otp_relay::routes::AppState;
use otp_relay::verify::TwilioVerifyClient;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting OTP relay server");

    let config = RelayConfig::from_env()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    let provider = TwilioVerifyClient::new(config.twilio.clone())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

    let app_state = web::Data::new(AppState {
        provider: Arc::new(provider),
        default_country_code: config.default_country_code.clone(),
    });

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    HttpServer::new(move || create_app(app_state.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
