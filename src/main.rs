use payments_ops_agent::agent::payment_agent::PaymentAgent;
use payments_ops_agent::config::AppConfig;
use payments_ops_agent::http::router::build_router;
use payments_ops_agent::issuers::health::IssuerHealth;
use payments_ops_agent::metrics::store::MetricsStore;
use payments_ops_agent::router::routing_table::RoutingTable;
use payments_ops_agent::service::traffic_loop::TrafficLoop;
use payments_ops_agent::simulator::engine::SimulatedSource;
use payments_ops_agent::AppState;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();
    tracing::info!(issuers = ?cfg.issuers, window_seconds = cfg.window_seconds, "starting payment operations agent");

    let metrics = MetricsStore::new(cfg.window_seconds);
    let routing = RoutingTable::new(cfg.issuers.iter().cloned());
    let health = IssuerHealth::new(cfg.issuers.iter().cloned());

    let traffic = TrafficLoop {
        source: Arc::new(SimulatedSource),
        metrics: metrics.clone(),
        routing: routing.clone(),
        health: health.clone(),
        interval: Duration::from_millis(cfg.traffic_interval_ms),
    };
    tokio::spawn(traffic.run());

    let agent = PaymentAgent::new(
        metrics,
        routing,
        health,
        Duration::from_secs(cfg.agent_interval_secs),
    );
    tokio::spawn(agent.clone().run());

    let state = AppState::from_agent(agent);
    let mut app = build_router(state);
    if std::path::Path::new(&cfg.static_dir).is_dir() {
        app = app.fallback_service(ServeDir::new(&cfg.static_dir));
    } else {
        tracing::warn!(dir = %cfg.static_dir, "static dashboard directory missing, not serving it");
    }
    let app = app.layer(CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
