use crate::domain::transaction::{Transaction, TransactionRequest};

pub mod engine;

#[async_trait::async_trait]
pub trait TransactionSource: Send + Sync {
    fn name(&self) -> &'static str;

    async fn next_request(&self, issuers: &[String]) -> Option<TransactionRequest>;

    async fn process(&self, request: TransactionRequest, issuer_health: f64) -> Transaction;
}
