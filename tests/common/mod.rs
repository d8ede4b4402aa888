#![allow(dead_code)]

use chrono::{DateTime, Utc};
use payments_ops_agent::agent::payment_agent::PaymentAgent;
use payments_ops_agent::agent::responder::FirstSelector;
use payments_ops_agent::domain::transaction::{PaymentMethod, PaymentStatus, Transaction};
use payments_ops_agent::issuers::health::IssuerHealth;
use payments_ops_agent::metrics::store::MetricsStore;
use payments_ops_agent::router::routing_table::RoutingTable;
use std::sync::Arc;
use std::time::Duration;

pub const ISSUERS: &[&str] = &["hdfc_bank", "icici_bank", "kotak_mahindra_bank", "sbi"];

pub fn tx(issuer: &str, status: PaymentStatus, latency_ms: u32, ts: DateTime<Utc>) -> Transaction {
    Transaction {
        id: uuid::Uuid::new_v4(),
        amount: 99.99,
        currency: "USD".to_string(),
        payment_method: PaymentMethod::CreditCard,
        issuer_id: issuer.to_string(),
        status,
        error_code: if status == PaymentStatus::Failure {
            Some("DECLINED".to_string())
        } else {
            None
        },
        latency_ms,
        timestamp: ts,
        is_retry: false,
    }
}

pub fn agent() -> PaymentAgent {
    PaymentAgent::new(
        MetricsStore::new(60),
        RoutingTable::new(ISSUERS.iter().copied()),
        IssuerHealth::new(ISSUERS.iter().copied()),
        Duration::from_millis(10),
    )
    .with_response_selector(Arc::new(FirstSelector))
}

/// Ingests `ok` successes and `failed` failures for `issuer`, timestamped now.
pub async fn seed(metrics: &MetricsStore, issuer: &str, ok: usize, failed: usize) {
    for _ in 0..ok {
        metrics
            .ingest(tx(issuer, PaymentStatus::Success, 180, Utc::now()))
            .await;
    }
    for _ in 0..failed {
        metrics
            .ingest(tx(issuer, PaymentStatus::Failure, 420, Utc::now()))
            .await;
    }
}
