use crate::AppState;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    pub issuer_id: String,
    pub enabled: bool,
}

pub async fn get_routes(State(state): State<AppState>) -> impl IntoResponse {
    (axum::http::StatusCode::OK, Json(state.routing.routes().await)).into_response()
}

pub async fn set_route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> impl IntoResponse {
    state.routing.set_route(&query.issuer_id, query.enabled).await;
    (axum::http::StatusCode::OK, Json(serde_json::json!({"status": "ok"}))).into_response()
}
