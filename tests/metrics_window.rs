mod common;

use chrono::{Duration, TimeZone, Utc};
use common::tx;
use payments_ops_agent::domain::transaction::PaymentStatus;
use payments_ops_agent::metrics::store::MetricsStore;

#[tokio::test]
async fn empty_window_defaults() {
    let store = MetricsStore::new(60);
    let stats = store.stats().await;
    assert_eq!(stats.success_rate, 1.0);
    assert_eq!(stats.avg_latency, 0.0);
    assert_eq!(stats.total, 0);
}

#[tokio::test]
async fn per_issuer_totals_sum_to_global() {
    let store = MetricsStore::new(60);
    let now = Utc::now();
    let plan = [
        ("hdfc_bank", 7, 3),
        ("icici_bank", 12, 0),
        ("sbi", 1, 4),
        ("kotak_mahindra_bank", 0, 2),
    ];
    for (issuer, ok, failed) in plan {
        for _ in 0..ok {
            store.ingest_at(tx(issuer, PaymentStatus::Success, 150, now), now).await;
        }
        for _ in 0..failed {
            store.ingest_at(tx(issuer, PaymentStatus::Failure, 900, now), now).await;
        }
    }
    store.ingest_at(tx("sbi", PaymentStatus::Blocked, 0, now), now).await;

    let stats = store.stats().await;
    let volume: u64 = stats.by_issuer.values().map(|s| s.volume).sum();
    let success: u64 = stats.by_issuer.values().map(|s| s.success).sum();

    assert_eq!(stats.total, 30);
    assert_eq!(volume, stats.total);
    assert_eq!(success, stats.success);
    assert_eq!(stats.success, 20);
    assert_eq!(stats.by_issuer["kotak_mahindra_bank"].success_rate, 0.0);
}

#[tokio::test]
async fn stale_records_are_gone_after_next_ingest() {
    let store = MetricsStore::new(60);
    let t0 = Utc.timestamp_opt(1_700_000_000, 0).single().unwrap();
    for i in 0..10 {
        let ts = t0 + Duration::seconds(i);
        store.ingest_at(tx("hdfc_bank", PaymentStatus::Failure, 1500, ts), ts).await;
    }
    assert_eq!(store.stats().await.total, 10);

    let later = t0 + Duration::seconds(125);
    store
        .ingest_at(tx("sbi", PaymentStatus::Success, 120, later), later)
        .await;

    let stats = store.stats().await;
    assert_eq!(stats.total, 1);
    assert!(!stats.by_issuer.contains_key("hdfc_bank"));
    assert_eq!(stats.success_rate, 1.0);
}

#[tokio::test]
async fn cleanup_is_lazy_until_next_ingest() {
    let store = MetricsStore::new(60);
    let t0 = Utc::now() - Duration::seconds(600);
    store.ingest_at(tx("sbi", PaymentStatus::Success, 100, t0), t0).await;

    assert_eq!(store.stats().await.total, 1);
}

#[tokio::test]
async fn concurrent_ingest_is_consistent() {
    let store = MetricsStore::new(60);
    let mut handles = Vec::new();
    for worker in 0..8 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            let issuer = if worker % 2 == 0 { "sbi" } else { "hdfc_bank" };
            for _ in 0..25 {
                store
                    .ingest(tx(issuer, PaymentStatus::Success, 200, Utc::now()))
                    .await;
            }
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    let stats = store.stats().await;
    assert_eq!(stats.total, 200);
    assert_eq!(stats.by_issuer["sbi"].volume, 100);
    assert_eq!(stats.by_issuer["hdfc_bank"].volume, 100);
}

#[tokio::test]
async fn zero_window_falls_back_to_default() {
    let store = MetricsStore::new(0);
    assert_eq!(store.window_seconds(), 60);
    store.ingest(tx("sbi", PaymentStatus::Success, 120, Utc::now())).await;
    assert_eq!(store.stats().await.total, 1);
}
