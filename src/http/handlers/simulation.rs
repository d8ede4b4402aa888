use crate::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FaultQuery {
    pub issuer_id: String,
    pub health: f64,
}

pub async fn inject_fault(
    State(state): State<AppState>,
    Query(query): Query<FaultQuery>,
) -> impl IntoResponse {
    let applied = state.health.set_health(&query.issuer_id, query.health).await;
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({
            "status": "ok",
            "msg": format!("Set {} health to {}", query.issuer_id, query.health),
            "applied": applied
        })),
    )
        .into_response()
}

pub async fn get_health(State(state): State<AppState>) -> impl IntoResponse {
    (axum::http::StatusCode::OK, Json(state.health.snapshot().await)).into_response()
}
