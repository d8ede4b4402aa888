use crate::metrics::store::IssuerStats;

pub const DEGRADED_SUCCESS_RATE: f64 = 0.95;
pub const RECOVERED_SUCCESS_RATE: f64 = 0.99;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remediation {
    ScaleUp,
    DisableRoute,
    AlreadyDisabled,
    RecoveryCandidate,
    Nominal,
}

impl Remediation {
    pub fn is_degraded(self) -> bool {
        matches!(
            self,
            Remediation::ScaleUp | Remediation::DisableRoute | Remediation::AlreadyDisabled
        )
    }
}

pub fn decide(stats: &IssuerStats, health: f64, route_enabled: bool) -> Remediation {
    if stats.volume == 0 {
        return Remediation::Nominal;
    }

    if stats.success_rate < DEGRADED_SUCCESS_RATE {
        if health < 1.0 {
            Remediation::ScaleUp
        } else if route_enabled {
            Remediation::DisableRoute
        } else {
            Remediation::AlreadyDisabled
        }
    } else if stats.success_rate > RECOVERED_SUCCESS_RATE && !route_enabled {
        Remediation::RecoveryCandidate
    } else {
        Remediation::Nominal
    }
}

pub trait RecoveryPolicy: Send + Sync {
    fn should_reenable(&self, issuer_id: &str, stats: &IssuerStats) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ManualReenable;

impl RecoveryPolicy for ManualReenable {
    fn should_reenable(&self, _issuer_id: &str, _stats: &IssuerStats) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(success_rate: f64, volume: u64) -> IssuerStats {
        IssuerStats {
            success_rate,
            avg_latency: 250.0,
            volume,
            success: (success_rate * volume as f64).round() as u64,
        }
    }

    #[test]
    fn tier_a_preferred_when_capacity_available() {
        assert_eq!(decide(&stats(0.80, 10), 0.5, true), Remediation::ScaleUp);
        assert_eq!(decide(&stats(0.80, 10), 0.5, false), Remediation::ScaleUp);
    }

    #[test]
    fn tier_b_when_health_maxed() {
        assert_eq!(decide(&stats(0.80, 10), 1.0, true), Remediation::DisableRoute);
    }

    #[test]
    fn tier_c_when_nothing_left() {
        assert_eq!(decide(&stats(0.80, 10), 1.0, false), Remediation::AlreadyDisabled);
    }

    #[test]
    fn threshold_is_strict() {
        assert_eq!(decide(&stats(0.95, 20), 0.5, true), Remediation::Nominal);
        assert_eq!(decide(&stats(0.9499, 20), 0.5, true), Remediation::ScaleUp);
    }

    #[test]
    fn empty_issuer_never_triggers() {
        assert_eq!(decide(&stats(0.0, 0), 0.1, true), Remediation::Nominal);
    }

    #[test]
    fn recovered_issuer_behind_disabled_route_is_flagged() {
        assert_eq!(decide(&stats(1.0, 10), 1.0, false), Remediation::RecoveryCandidate);
        assert_eq!(decide(&stats(1.0, 10), 1.0, true), Remediation::Nominal);
        assert!(!ManualReenable.should_reenable("sbi", &stats(1.0, 10)));
    }
}
