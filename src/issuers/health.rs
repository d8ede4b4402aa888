use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

pub const SCALE_UP_STEP: f64 = 0.3;

#[derive(Clone, Default)]
pub struct IssuerHealth {
    scores: Arc<RwLock<HashMap<String, f64>>>,
}

impl IssuerHealth {
    pub fn new<I, S>(issuers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let scores = issuers.into_iter().map(|i| (i.into(), 1.0)).collect();
        Self {
            scores: Arc::new(RwLock::new(scores)),
        }
    }

    pub async fn get_health(&self, issuer_id: &str) -> f64 {
        self.scores.read().await.get(issuer_id).copied().unwrap_or(1.0)
    }

    pub async fn set_health(&self, issuer_id: &str, value: f64) -> bool {
        if !value.is_finite() {
            tracing::warn!(issuer = issuer_id, "ignoring non-finite health value");
            return false;
        }
        let mut scores = self.scores.write().await;
        match scores.get_mut(issuer_id) {
            Some(score) => {
                *score = value.clamp(0.0, 1.0);
                tracing::info!(issuer = issuer_id, health = *score, "issuer health set");
                true
            }
            None => {
                tracing::warn!(issuer = issuer_id, "health update for untracked issuer ignored");
                false
            }
        }
    }

    /// Adds [`SCALE_UP_STEP`] capped at 1.0. `false` means nothing changed:
    /// the issuer is untracked or already at full capacity.
    pub async fn scale_up(&self, issuer_id: &str) -> bool {
        let mut scores = self.scores.write().await;
        let Some(score) = scores.get_mut(issuer_id) else {
            return false;
        };
        if *score >= 1.0 {
            return false;
        }
        *score = (*score + SCALE_UP_STEP).min(1.0);
        tracing::info!(issuer = issuer_id, health = *score, "issuer scaled up");
        true
    }

    pub async fn issuers(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.scores.read().await.keys().cloned().collect();
        ids.sort();
        ids
    }

    pub async fn snapshot(&self) -> HashMap<String, f64> {
        self.scores.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_issuer_reads_full_health_and_ignores_writes() {
        let health = IssuerHealth::new(["sbi"]);
        assert_eq!(health.get_health("unknown").await, 1.0);
        assert!(!health.set_health("unknown", 0.2).await);
        assert_eq!(health.get_health("unknown").await, 1.0);
        assert!(!health.snapshot().await.contains_key("unknown"));
    }

    #[tokio::test]
    async fn set_health_clamps() {
        let health = IssuerHealth::new(["sbi"]);
        assert!(health.set_health("sbi", 1.7).await);
        assert_eq!(health.get_health("sbi").await, 1.0);
        assert!(health.set_health("sbi", -0.5).await);
        assert_eq!(health.get_health("sbi").await, 0.0);
        assert!(!health.set_health("sbi", f64::NAN).await);
        assert_eq!(health.get_health("sbi").await, 0.0);
    }

    #[tokio::test]
    async fn scale_up_steps_and_caps() {
        let health = IssuerHealth::new(["sbi"]);
        health.set_health("sbi", 0.5).await;

        assert!(health.scale_up("sbi").await);
        assert!((health.get_health("sbi").await - 0.8).abs() < 1e-9);
        assert!(health.scale_up("sbi").await);
        assert_eq!(health.get_health("sbi").await, 1.0);

        for _ in 0..3 {
            assert!(!health.scale_up("sbi").await);
        }
        assert_eq!(health.get_health("sbi").await, 1.0);
    }

    #[tokio::test]
    async fn scale_up_unknown_is_noop() {
        let health = IssuerHealth::new(["sbi"]);
        assert!(!health.scale_up("unknown").await);
    }
}
