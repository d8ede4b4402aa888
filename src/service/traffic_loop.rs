use crate::issuers::health::IssuerHealth;
use crate::metrics::store::MetricsStore;
use crate::router::routing_table::RoutingTable;
use crate::simulator::TransactionSource;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct TrafficLoop {
    pub source: Arc<dyn TransactionSource>,
    pub metrics: MetricsStore,
    pub routing: RoutingTable,
    pub health: IssuerHealth,
    pub interval: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    Ingested(String),
    Dropped(String),
    Idle,
}

impl TrafficLoop {
    pub async fn run(self) {
        tracing::info!(source = self.source.name(), "traffic loop started");
        loop {
            self.tick().await;
            tokio::time::sleep(self.interval).await;
        }
    }

    pub async fn tick(&self) -> TickOutcome {
        let issuers = self.health.issuers().await;
        let Some(request) = self.source.next_request(&issuers).await else {
            return TickOutcome::Idle;
        };

        let issuer_id = request.issuer_id.clone();
        if !self.routing.is_enabled(&issuer_id).await {
            tracing::debug!(issuer = %issuer_id, "route disabled, request dropped");
            return TickOutcome::Dropped(issuer_id);
        }

        let issuer_health = self.health.get_health(&issuer_id).await;
        let tx = self.source.process(request, issuer_health).await;
        tracing::debug!(
            issuer = %issuer_id,
            status = ?tx.status,
            latency_ms = tx.latency_ms,
            "transaction ingested"
        );
        self.metrics.ingest(tx).await;
        TickOutcome::Ingested(issuer_id)
    }
}
