use crate::agent::payment_agent::PaymentAgent;
use crate::agent::decision::DEGRADED_SUCCESS_RATE;
use crate::domain::agent_log::Stage;
use crate::metrics::store::AggregateStats;

const ACTION_WORDS: &[&str] = &["scale", "boost", "fix", "repair", "heal"];
const STATUS_WORDS: &[&str] = &["status", "report", "overview", "dashboard", "health", "metrics"];
const ALERT_WORDS: &[&str] = &["alert", "error", "fail", "issue", "bug", "problem"];
const GREETING_WORDS: &[&str] = &["hello", "hi", "hey", "greetings"];

const KNOWLEDGE_BASE: &[(&str, &str)] = &[
    (
        "what is sentinelpay",
        "SentinelPay is an autonomous payment operations agent designed to monitor, route, and self-heal payment transaction streams in real-time.",
    ),
    (
        "what is success rate",
        "Success Rate (SR) is the percentage of transactions that complete successfully. We target >99% globally.",
    ),
    (
        "what is latency",
        "Latency is the time taken for a transaction to process. High latency (>400ms) can lead to user drop-offs.",
    ),
    (
        "how do you work",
        "I operate on a continuous O-R-D-A loop: Observe data, Reason about patterns, Decide on actions, and Act on infrastructure.",
    ),
    (
        "help",
        "I can help you monitor bank status (e.g., 'Status of SBI'), fix issues (e.g., 'Scale HDFC'), or answer questions about the system.",
    ),
];

const GREETINGS: &[&str] = &[
    "👋 Hello! I am SentinelPay, ready to monitor your transactions.",
    "High performance detected. How can I assist you in Operations today?",
    "Greetings. All systems are green. What's on your mind?",
];

fn contains_any(msg: &str, words: &[&str]) -> bool {
    words.iter().any(|w| msg.contains(w))
}

pub fn mentions(msg: &str, issuer: &str) -> bool {
    let spaced = issuer.replace('_', " ");
    let short = issuer.split('_').next().unwrap_or(issuer);
    msg.contains(issuer) || msg.contains(&spaced) || (!short.is_empty() && msg.contains(short))
}

pub fn display_name(issuer: &str) -> String {
    issuer
        .split('_')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

impl PaymentAgent {
    pub async fn chat(&self, message: &str) -> String {
        let msg = message.to_lowercase();
        let msg = msg.trim();
        let stats = self.metrics.stats().await;
        let known = self.known_issuers(&stats).await;

        if contains_any(msg, ACTION_WORDS) {
            return self.handle_action(msg, &known).await;
        }

        if let Some(issuer) = known.iter().find(|i| mentions(msg, i)) {
            return self.handle_entity_query(issuer, &stats).await;
        }

        if contains_any(msg, STATUS_WORDS) {
            return global_status(&stats);
        }

        if contains_any(msg, ALERT_WORDS) {
            return alerts(&stats);
        }

        if let Some((_, answer)) = KNOWLEDGE_BASE.iter().find(|(key, _)| msg.contains(key)) {
            return format!("💡 **{}**", answer);
        }

        if contains_any(msg, GREETING_WORDS) {
            return self.responder.select(GREETINGS).to_string();
        }

        format!(
            "🤔 I'm analyzing your request: *'{}'*...\n\n\
             As an operational agent, my expertise is in **Transaction Monitoring**, **Cloud Scaling**, and **Route Optimization**.\n\
             Try asking:\n\
             - *'What is the latency of SBI?'*\n\
             - *'Scale HDFC infrastructure'*\n\
             - *'Show me global health'*",
            message
        )
    }

    async fn known_issuers(&self, stats: &AggregateStats) -> Vec<String> {
        let mut known = self.health.issuers().await;
        known.extend(stats.by_issuer.keys().cloned());
        known.sort();
        known.dedup();
        known
    }

    async fn handle_action(&self, msg: &str, known: &[String]) -> String {
        let Some(issuer) = known.iter().find(|i| mentions(msg, i)) else {
            return "I can scale infrastructure, but I need to know which bank. Try saying **'Scale ICICI'**."
                .to_string();
        };

        let name = display_name(issuer);
        if self.health.scale_up(issuer).await {
            self.log(Stage::Act, format!("Chat Command: Scaled {}.", issuer)).await;
            format!(
                "🚀 **Action Confirmed:** I have provisioned additional compute units for **{}**. You should see latency drop within seconds.",
                name
            )
        } else {
            format!(
                "⚠️ **{}** is already running at **100% capacity**. Further scaling is not possible.",
                name
            )
        }
    }

    async fn handle_entity_query(&self, issuer: &str, stats: &AggregateStats) -> String {
        let name = display_name(issuer);
        let Some(data) = stats.by_issuer.get(issuer) else {
            return format!(
                "ℹ️ **{} Analysis**\nNo transactions observed in the current window.",
                name
            );
        };
        let active = self.routing.is_enabled(issuer).await;
        let degraded = data.success_rate < DEGRADED_SUCCESS_RATE;

        let mut comment = if degraded {
            "Performance is degraded. Recommending inspection.".to_string()
        } else {
            "Performance is optimal.".to_string()
        };
        if data.avg_latency > 300.0 {
            comment.push_str(" Latency is higher than average.");
        }

        format!(
            "{} **{} Analysis**\n\
             • **Status**: {}\n\
             • **Success Rate**: {:.1}%\n\
             • **Latency**: {:.0}ms\n\
             • **Insight**: {}",
            if degraded { "🔴" } else { "🟢" },
            name,
            if active { "✅ Active" } else { "⛔ Rerouted" },
            data.success_rate * 100.0,
            data.avg_latency,
            comment
        )
    }
}

fn global_status(stats: &AggregateStats) -> String {
    let sr = stats.success_rate * 100.0;
    if sr > 98.0 {
        format!(
            "🌍 **Global Systems Nominal**\nCurrently processing **{} TPM** with a **{:.1}%** success rate. All payment rails are fully operational.",
            stats.total, sr
        )
    } else if sr > 90.0 {
        format!(
            "⚠️ **Minor Turbulence**\nGlobal Success Rate is **{:.1}%**. I am actively optimizing routes to mitigate impact.",
            sr
        )
    } else {
        format!(
            "🚨 **Critical System Alert**\nSuccess Rate has dropped to **{:.1}%**. Immediate attention required on failing banks.",
            sr
        )
    }
}

fn alerts(stats: &AggregateStats) -> String {
    let mut degraded: Vec<(&String, f64)> = stats
        .by_issuer
        .iter()
        .filter(|(_, s)| s.success_rate < DEGRADED_SUCCESS_RATE)
        .map(|(issuer, s)| (issuer, s.success_rate))
        .collect();
    degraded.sort_by(|a, b| a.0.cmp(b.0));

    if degraded.is_empty() {
        return "🛡️ **Security Scan Complete**\nNo active alerts. The system is stable.".to_string();
    }

    let issues: Vec<String> = degraded
        .into_iter()
        .map(|(issuer, sr)| format!("**{}** (SR: {:.1}%)", display_name(issuer), sr * 100.0))
        .collect();
    format!(
        "👮 **Active Incidents Report**\nThinking... I have detected anomalies in: {}. autonomous recovery is active.",
        issues.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_title_cases_segments() {
        assert_eq!(display_name("kotak_mahindra_bank"), "Kotak Mahindra Bank");
        assert_eq!(display_name("sbi"), "Sbi");
    }

    #[test]
    fn mention_forms() {
        assert!(mentions("status of hdfc_bank", "hdfc_bank"));
        assert!(mentions("how is hdfc bank doing", "hdfc_bank"));
        assert!(mentions("scale hdfc", "hdfc_bank"));
        assert!(!mentions("scale icici", "hdfc_bank"));
    }

    #[test]
    fn global_status_bands() {
        let mut stats = AggregateStats::empty();
        assert!(global_status(&stats).contains("Nominal"));
        stats.success_rate = 0.95;
        assert!(global_status(&stats).contains("Minor Turbulence"));
        stats.success_rate = 0.5;
        assert!(global_status(&stats).contains("Critical"));
    }
}
