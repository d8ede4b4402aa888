use crate::domain::transaction::Transaction;
use crate::metrics::window::cleanup;
use anyhow::{ensure, Result};
use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuerStats {
    pub success_rate: f64,
    pub avg_latency: f64,
    pub volume: u64,
    pub success: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateStats {
    pub total: u64,
    pub success: u64,
    pub success_rate: f64,
    pub avg_latency: f64,
    pub by_issuer: HashMap<String, IssuerStats>,
}

impl AggregateStats {
    pub fn empty() -> Self {
        Self {
            total: 0,
            success: 0,
            success_rate: 1.0,
            avg_latency: 0.0,
            by_issuer: HashMap::new(),
        }
    }
}

#[derive(Default)]
struct IssuerAccumulator {
    volume: u64,
    success: u64,
    latency_sum: u64,
}

pub fn compute(records: &VecDeque<Transaction>) -> Result<AggregateStats> {
    if records.is_empty() {
        return Ok(AggregateStats::empty());
    }

    let mut total: u64 = 0;
    let mut success: u64 = 0;
    let mut latency_sum: u64 = 0;
    let mut groups: HashMap<&str, IssuerAccumulator> = HashMap::new();

    for tx in records {
        let ok = tx.is_success();
        total += 1;
        latency_sum += u64::from(tx.latency_ms);
        if ok {
            success += 1;
        }

        let acc = groups.entry(tx.issuer_id.as_str()).or_default();
        acc.volume += 1;
        acc.latency_sum += u64::from(tx.latency_ms);
        if ok {
            acc.success += 1;
        }
    }

    let by_issuer: HashMap<String, IssuerStats> = groups
        .into_iter()
        .map(|(issuer, acc)| {
            (
                issuer.to_string(),
                IssuerStats {
                    success_rate: acc.success as f64 / acc.volume as f64,
                    avg_latency: acc.latency_sum as f64 / acc.volume as f64,
                    volume: acc.volume,
                    success: acc.success,
                },
            )
        })
        .collect();

    let stats = AggregateStats {
        total,
        success,
        success_rate: success as f64 / total as f64,
        avg_latency: latency_sum as f64 / total as f64,
        by_issuer,
    };
    check_invariants(&stats)?;
    Ok(stats)
}

fn check_invariants(stats: &AggregateStats) -> Result<()> {
    ensure!(
        stats.success_rate.is_finite() && (0.0..=1.0).contains(&stats.success_rate),
        "global success rate out of range: {}",
        stats.success_rate
    );
    ensure!(
        stats.avg_latency.is_finite() && stats.avg_latency >= 0.0,
        "global average latency invalid: {}",
        stats.avg_latency
    );
    for (issuer, s) in &stats.by_issuer {
        ensure!(
            s.success_rate.is_finite() && (0.0..=1.0).contains(&s.success_rate),
            "success rate for {} out of range: {}",
            issuer,
            s.success_rate
        );
        ensure!(
            s.avg_latency.is_finite(),
            "average latency for {} is not finite",
            issuer
        );
    }
    let volume: u64 = stats.by_issuer.values().map(|s| s.volume).sum();
    let success: u64 = stats.by_issuer.values().map(|s| s.success).sum();
    ensure!(
        volume == stats.total && success == stats.success,
        "per-issuer totals ({}/{}) disagree with global ({}/{})",
        success,
        volume,
        stats.success,
        stats.total
    );
    Ok(())
}

/// Trailing-window transaction store.
///
/// Ingest and stats share one lock, so a reader sees the window either before
/// or after an ingest+cleanup, never in between.
#[derive(Clone)]
pub struct MetricsStore {
    records: Arc<Mutex<VecDeque<Transaction>>>,
    window: TimeDelta,
}

pub const DEFAULT_WINDOW_SECONDS: u64 = 60;

pub fn window_duration(window_seconds: u64) -> TimeDelta {
    let window = i64::try_from(window_seconds)
        .ok()
        .filter(|secs| *secs > 0)
        .and_then(TimeDelta::try_seconds);
    match window {
        Some(window) => window,
        None => {
            tracing::warn!(
                window_seconds,
                default = DEFAULT_WINDOW_SECONDS,
                "unusable metrics window, falling back to default"
            );
            TimeDelta::seconds(DEFAULT_WINDOW_SECONDS as i64)
        }
    }
}

fn or_empty(result: Result<AggregateStats>) -> AggregateStats {
    match result {
        Ok(stats) => stats,
        Err(e) => {
            tracing::error!("metrics invariant violated, reporting empty window: {}", e);
            AggregateStats::empty()
        }
    }
}

impl MetricsStore {
    pub fn new(window_seconds: u64) -> Self {
        Self {
            records: Arc::new(Mutex::new(VecDeque::new())),
            window: window_duration(window_seconds),
        }
    }

    pub fn window_seconds(&self) -> u64 {
        self.window.num_seconds().unsigned_abs()
    }

    pub async fn ingest(&self, tx: Transaction) {
        self.ingest_at(tx, Utc::now()).await;
    }

    pub async fn ingest_at(&self, tx: Transaction, now: DateTime<Utc>) {
        let mut records = self.records.lock().await;
        records.push_back(tx);
        let current = std::mem::take(&mut *records);
        *records = cleanup(current, now, self.window);
    }

    pub async fn stats(&self) -> AggregateStats {
        let records = self.records.lock().await;
        or_empty(compute(&records))
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}
