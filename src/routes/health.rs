use actix_web::HttpResponse;

/// Handler for `GET /`
///
/// Plain liveness probe; does not touch the provider.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("OTP Server is running")
}

#[cfg(test)]
mod tests {
    use actix_web::{body::to_bytes, http::StatusCode};

    use super::*;

    #[actix_rt::test]
    async fn reports_that_the_server_is_running() {
        let response = health_check().await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body()).await.unwrap();
        assert_eq!(body, "OTP Server is running");
    }
}
