use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Upi,
    Wallet,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Success,
    Failure,
    Blocked,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: f64,
    pub currency: String,
    pub payment_method: PaymentMethod,
    pub issuer_id: String,
    pub status: PaymentStatus,
    pub error_code: Option<String>,
    pub latency_ms: u32,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub is_retry: bool,
}

impl Transaction {
    pub fn is_success(&self) -> bool {
        self.status == PaymentStatus::Success
    }
}

#[derive(Debug, Clone)]
pub struct TransactionRequest {
    pub id: Uuid,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub issuer_id: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_serialize_snake_case() {
        let tx = Transaction {
            id: Uuid::new_v4(),
            amount: 50.0,
            currency: "USD".to_string(),
            payment_method: PaymentMethod::CreditCard,
            issuer_id: "sbi".to_string(),
            status: PaymentStatus::Failure,
            error_code: Some("DECLINED".to_string()),
            latency_ms: 210,
            timestamp: chrono::Utc::now(),
            is_retry: false,
        };

        let s = serde_json::to_string(&tx).unwrap();
        assert!(s.contains("\"credit_card\""));
        assert!(s.contains("\"failure\""));
        assert!(!tx.is_success());
    }
}
