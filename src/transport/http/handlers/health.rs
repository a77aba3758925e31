use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (
            status = 200,
            description = "Service is up; reports the number of loaded rows",
            body = ApiResponse
        )
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    let hotels = state.rows.hotels().await;
    let cities = state.rows.cities().await;
    (
        StatusCode::OK,
        Json(ApiResponse::ok(serde_json::json!({
            "status": "ok",
            "hotels": hotels.len(),
            "cities": cities.len(),
        }))),
    )
}
