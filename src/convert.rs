//! Conversion arithmetic and result formatting.

use anyhow::{Result, anyhow};
use std::fmt;
use tracing::debug;

use crate::core::rates::RateProvider;

/// Outcome of a single conversion, valid for one loop iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub converted: f64,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} is equal to {} {}.",
            fmt_amount(self.amount),
            self.from,
            fmt_amount(self.converted),
            self.to
        )
    }
}

/// Rounds to two decimal places, half away from zero.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Formats an amount so whole values keep a trailing ".0" (10 -> "10.0").
fn fmt_amount(value: f64) -> String {
    let s = format!("{value}");
    if s.contains('.') { s } else { format!("{s}.0") }
}

/// Converts `amount` from one currency to another using freshly fetched rates.
///
/// The source code is not validated locally; an unknown base currency
/// surfaces as a fetch error from the provider.
pub async fn convert(
    provider: &impl RateProvider,
    amount: f64,
    from: &str,
    to: &str,
) -> Result<Conversion> {
    let rates = provider.fetch_rates(from).await?;

    let rate = rates
        .get(to)
        .ok_or_else(|| anyhow!("'{}' is not available in exchange rates", to))?;

    let converted = round2(amount * rate);
    debug!(amount, from, to, rate, converted, "Converted amount");

    Ok(Conversion {
        amount,
        from: from.to_string(),
        to: to.to_string(),
        converted,
    })
}
