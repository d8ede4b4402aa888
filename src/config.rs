use crate::metrics::store::DEFAULT_WINDOW_SECONDS;

pub const DEFAULT_ISSUERS: &[&str] = &["hdfc_bank", "icici_bank", "kotak_mahindra_bank", "sbi"];

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub window_seconds: u64,
    pub agent_interval_secs: u64,
    pub traffic_interval_ms: u64,
    pub issuers: Vec<String>,
    pub static_dir: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string()),
            window_seconds: parse_window_seconds(std::env::var("METRICS_WINDOW_SECONDS").ok().as_deref()),
            agent_interval_secs: parse_env("AGENT_INTERVAL_SECS", 5),
            traffic_interval_ms: parse_env("TRAFFIC_INTERVAL_MS", 200),
            issuers: std::env::var("ISSUERS")
                .ok()
                .map(|s| parse_issuers(&s))
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_ISSUERS.iter().map(|s| s.to_string()).collect()),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
        }
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, default: T) -> T {
    std::env::var(name)
        .ok()
        .and_then(|s| s.trim().parse::<T>().ok())
        .unwrap_or(default)
}

pub fn parse_window_seconds(raw: Option<&str>) -> u64 {
    let Some(raw) = raw else {
        return DEFAULT_WINDOW_SECONDS;
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => secs,
        _ => {
            tracing::warn!(
                value = raw,
                default = DEFAULT_WINDOW_SECONDS,
                "METRICS_WINDOW_SECONDS must be a positive integer, using default"
            );
            DEFAULT_WINDOW_SECONDS
        }
    }
}

pub fn parse_issuers(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
