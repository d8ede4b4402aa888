use crate::agent::decision::{decide, ManualReenable, RecoveryPolicy, Remediation};
use crate::agent::log_buffer::LogBuffer;
use crate::agent::responder::{RandomSelector, ResponseSelector};
use crate::domain::agent_log::{LogEntry, Stage};
use crate::issuers::health::IssuerHealth;
use crate::metrics::store::{IssuerStats, MetricsStore};
use crate::router::routing_table::RoutingTable;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub struct IssuerOutcome {
    pub issuer_id: String,
    pub success_rate: f64,
    pub remediation: Remediation,
}

#[derive(Clone)]
pub struct PaymentAgent {
    pub metrics: MetricsStore,
    pub routing: RoutingTable,
    pub health: IssuerHealth,
    pub(crate) responder: Arc<dyn ResponseSelector>,
    recovery: Arc<dyn RecoveryPolicy>,
    logs: Arc<Mutex<LogBuffer>>,
    active: Arc<AtomicBool>,
    interval: Duration,
}

impl PaymentAgent {
    pub fn new(
        metrics: MetricsStore,
        routing: RoutingTable,
        health: IssuerHealth,
        interval: Duration,
    ) -> Self {
        Self {
            metrics,
            routing,
            health,
            responder: Arc::new(RandomSelector),
            recovery: Arc::new(ManualReenable),
            logs: Arc::new(Mutex::new(LogBuffer::default())),
            active: Arc::new(AtomicBool::new(true)),
            interval,
        }
    }

    pub fn with_recovery_policy(mut self, policy: Arc<dyn RecoveryPolicy>) -> Self {
        self.recovery = policy;
        self
    }

    pub fn with_response_selector(mut self, selector: Arc<dyn ResponseSelector>) -> Self {
        self.responder = selector;
        self
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn stop(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    pub async fn logs(&self) -> Vec<LogEntry> {
        self.logs.lock().await.entries()
    }

    pub(crate) async fn log(&self, stage: Stage, message: String) {
        tracing::info!(stage = ?stage, "{}", message);
        self.logs.lock().await.push(LogEntry::new(stage, message));
    }

    pub async fn run(self) {
        tracing::info!(interval_ms = self.interval.as_millis() as u64, "decision loop started");
        while self.is_active() {
            self.reason_and_act().await;
            tokio::time::sleep(self.interval).await;
        }
        tracing::info!("decision loop stopped");
    }

    pub async fn reason_and_act(&self) -> Vec<IssuerOutcome> {
        let stats = self.metrics.stats().await;
        self.log(
            Stage::Observe,
            format!(
                "Analyzed {} transactions. Global SR: {:.2}",
                stats.total, stats.success_rate
            ),
        )
        .await;

        let mut issuers: Vec<(&String, &IssuerStats)> = stats.by_issuer.iter().collect();
        issuers.sort_by(|a, b| a.0.cmp(b.0));

        let mut found_issue = false;
        let mut outcomes = Vec::with_capacity(issuers.len());
        for (issuer, data) in issuers {
            let health = self.health.get_health(issuer).await;
            let route_enabled = self.routing.is_enabled(issuer).await;
            let remediation = decide(data, health, route_enabled);

            if remediation.is_degraded() {
                found_issue = true;
                self.log(
                    Stage::Reason,
                    format!(
                        "Detected drop in {} (SR: {:.2}). Initiating Autonomous Recovery.",
                        issuer, data.success_rate
                    ),
                )
                .await;
            }

            self.apply(issuer, data, remediation).await;
            outcomes.push(IssuerOutcome {
                issuer_id: issuer.clone(),
                success_rate: data.success_rate,
                remediation,
            });
        }

        if !found_issue {
            self.log(
                Stage::Reason,
                "System operating within normal parameters.".to_string(),
            )
            .await;
        }

        outcomes
    }

    async fn apply(&self, issuer: &str, data: &IssuerStats, remediation: Remediation) {
        match remediation {
            Remediation::ScaleUp => {
                self.log(
                    Stage::Decide,
                    format!(
                        "Attempting to scale cloud infrastructure for {} to improve SR.",
                        issuer
                    ),
                )
                .await;
                if self.health.scale_up(issuer).await {
                    self.log(
                        Stage::Act,
                        format!("Scaled Up {} resources. Monitoring for improvement.", issuer),
                    )
                    .await;
                } else {
                    self.log(
                        Stage::Act,
                        format!("Scale-up for {} had no effect.", issuer),
                    )
                    .await;
                }
            }
            Remediation::DisableRoute => {
                self.log(
                    Stage::Decide,
                    format!(
                        "Scaling ineffective. Disabling route to {} to protect Global SR.",
                        issuer
                    ),
                )
                .await;
                self.routing.set_route(issuer, false).await;
                tracing::warn!(issuer, success_rate = data.success_rate, "route disabled by agent");
                self.log(
                    Stage::Act,
                    format!("Action Executed: Route {} -> DISABLED.", issuer),
                )
                .await;
            }
            Remediation::AlreadyDisabled => {
                self.log(
                    Stage::Decide,
                    format!("Route {} is already disabled.", issuer),
                )
                .await;
            }
            Remediation::RecoveryCandidate => {
                if self.recovery.should_reenable(issuer, data) {
                    self.routing.set_route(issuer, true).await;
                    self.log(
                        Stage::Act,
                        format!("Action Executed: Route {} -> ENABLED after recovery.", issuer),
                    )
                    .await;
                } else {
                    tracing::debug!(issuer, "issuer recovered behind disabled route; awaiting operator");
                }
            }
            Remediation::Nominal => {}
        }
    }
}
