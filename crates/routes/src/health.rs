use crate::routes::routes_path::HealthCheck;
use axum::http::StatusCode;

pub(crate) async fn health_check(_: HealthCheck) -> StatusCode {
    StatusCode::OK
}
