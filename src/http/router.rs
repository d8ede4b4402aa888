use crate::http::handlers::{agent, metrics, ops, routes, simulation};
use crate::AppState;
use axum::routing::{get, post};
use axum::Router;

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/metrics", get(metrics::get_metrics))
        .route("/agent/logs", get(agent::get_logs))
        .route("/agent/chat", post(agent::chat))
        .route("/simulation/fault", post(simulation::inject_fault))
        .route("/simulation/health", get(simulation::get_health))
        .route("/config/routes", get(routes::get_routes).post(routes::set_route));

    Router::new()
        .route("/health", get(ops::health))
        .route("/ops/readiness", get(ops::readiness))
        .route("/ops/liveness", get(ops::liveness))
        .nest("/api", api)
        .with_state(state)
}
