use crate::health::responses::HealthCheckResponse;
use axum::response::Json;

#[axum::debug_handler]
pub async fn healthcheck() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        error: false,
        version: env!("CARGO_PKG_VERSION").to_owned(),
    })
}
