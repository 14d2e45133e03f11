use anyhow::Result;

use crate::domain::{Currency, Period, Series};

/// Abstract interface for fetching price histories.
///
/// Implementations are called off the UI thread on native targets.
pub trait HistoryProvider: Send + Sync {
    fn fetch_history(&self, coin_id: &str, currency: Currency, period: Period) -> Result<Series>;
}
