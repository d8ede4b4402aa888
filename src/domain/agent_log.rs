use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Stage {
    Observe,
    Reason,
    Decide,
    Act,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub stage: Stage,
    pub message: String,
}

impl LogEntry {
    pub fn new(stage: Stage, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Utc::now(),
            stage,
            message: message.into(),
        }
    }
}
