//! Exchange rate abstractions

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Rates keyed by currency code, relative to a single base currency.
/// Valid only for the query that produced it; never cached.
pub type RateTable = HashMap<String, f64>;

#[async_trait]
pub trait RateProvider: Send + Sync {
    async fn fetch_rates(&self, base: &str) -> Result<RateTable>;
}
