pub mod config;
pub mod domain {
    pub mod agent_log;
    pub mod transaction;
}
pub mod agent {
    pub mod chat;
    pub mod payment_agent;
    pub mod decision;
    pub mod log_buffer;
    pub mod responder;
}
pub mod http {
    pub mod handlers {
        pub mod agent;
        pub mod metrics;
        pub mod ops;
        pub mod routes;
        pub mod simulation;
    }
    pub mod router;
}
pub mod issuers {
    pub mod health;
}
pub mod metrics {
    pub mod store;
    pub mod window;
}
pub mod router {
    pub mod routing_table;
}
pub mod service {
    pub mod traffic_loop;
}
pub mod simulator;

#[derive(Clone)]
pub struct AppState {
    pub agent: agent::payment_agent::PaymentAgent,
    pub metrics: metrics::store::MetricsStore,
    pub routing: router::routing_table::RoutingTable,
    pub health: issuers::health::IssuerHealth,
}

impl AppState {
    pub fn from_agent(agent: agent::payment_agent::PaymentAgent) -> Self {
        Self {
            metrics: agent.metrics.clone(),
            routing: agent.routing.clone(),
            health: agent.health.clone(),
            agent,
        }
    }
}
