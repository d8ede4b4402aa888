use crate::AppState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

pub async fn get_metrics(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.metrics.stats().await;
    (axum::http::StatusCode::OK, Json(stats)).into_response()
}
