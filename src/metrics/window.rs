use crate::domain::transaction::Transaction;
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;

pub fn cutoff(now: DateTime<Utc>, window: Duration) -> DateTime<Utc> {
    now.checked_sub_signed(window)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Keeps only records strictly newer than `now - window`, preserving arrival order.
pub fn cleanup(
    mut records: VecDeque<Transaction>,
    now: DateTime<Utc>,
    window: Duration,
) -> VecDeque<Transaction> {
    let floor = cutoff(now, window);
    records.retain(|tx| tx.timestamp > floor);
    records
}
