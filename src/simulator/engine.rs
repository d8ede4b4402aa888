use crate::domain::transaction::{
    PaymentMethod, PaymentStatus, Transaction, TransactionRequest,
};
use crate::simulator::TransactionSource;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::{Distribution, Normal};
use uuid::Uuid;

pub const AMOUNTS: &[f64] = &[10.0, 25.0, 50.0, 99.99, 150.0, 500.0];
pub const METHODS: &[PaymentMethod] = &[
    PaymentMethod::CreditCard,
    PaymentMethod::DebitCard,
    PaymentMethod::Wallet,
];
pub const LATENCY_BASE_MS: f64 = 200.0;
pub const LATENCY_STD_DEV_MS: f64 = 50.0;
pub const LATENCY_FLOOR_MS: u32 = 20;
pub const UNHEALTHY_THRESHOLD: f64 = 0.8;
pub const BASE_FAILURE_RATE: f64 = 0.01;
pub const TIMEOUT_LATENCY_MS: u32 = 1000;

pub fn generate_request<R: Rng>(rng: &mut R, issuers: &[String]) -> Option<TransactionRequest> {
    let issuer_id = issuers.choose(rng)?.clone();
    Some(TransactionRequest {
        id: Uuid::new_v4(),
        amount: AMOUNTS.choose(rng).copied().unwrap_or(AMOUNTS[0]),
        payment_method: METHODS.choose(rng).copied().unwrap_or(PaymentMethod::CreditCard),
        issuer_id,
        timestamp: chrono::Utc::now(),
    })
}

pub fn process_transaction<R: Rng>(
    rng: &mut R,
    request: TransactionRequest,
    issuer_health: f64,
) -> Transaction {
    let mut latency = if let Ok(dist) = Normal::new(LATENCY_BASE_MS, LATENCY_STD_DEV_MS) {
        dist.sample(rng)
    } else {
        LATENCY_BASE_MS
    };
    if issuer_health < UNHEALTHY_THRESHOLD {
        latency += f64::from(rng.gen_range(500_u32..=2000));
    }
    let latency_ms = (latency.round().max(0.0) as u32).max(LATENCY_FLOOR_MS);

    let fail_prob = BASE_FAILURE_RATE + (1.0 - issuer_health);
    let (status, error_code) = if rng.gen::<f64>() < fail_prob {
        let code = if latency_ms > TIMEOUT_LATENCY_MS {
            "ISSUER_TIMEOUT"
        } else {
            "DECLINED"
        };
        (PaymentStatus::Failure, Some(code.to_string()))
    } else {
        (PaymentStatus::Success, None)
    };

    Transaction {
        id: request.id,
        amount: request.amount,
        currency: "USD".to_string(),
        payment_method: request.payment_method,
        issuer_id: request.issuer_id,
        status,
        error_code,
        latency_ms,
        timestamp: request.timestamp,
        is_retry: false,
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedSource;

#[async_trait::async_trait]
impl TransactionSource for SimulatedSource {
    fn name(&self) -> &'static str {
        "simulated"
    }

    async fn next_request(&self, issuers: &[String]) -> Option<TransactionRequest> {
        generate_request(&mut rand::thread_rng(), issuers)
    }

    async fn process(&self, request: TransactionRequest, issuer_health: f64) -> Transaction {
        process_transaction(&mut rand::thread_rng(), request, issuer_health)
    }
}
