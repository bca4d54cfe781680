use axum::Json;
use shared::models::PingResponse;

pub async fn ping() -> Json<PingResponse> {
    Json(PingResponse::ok())
}
