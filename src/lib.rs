pub mod cli;
pub mod convert;
pub mod core;
pub mod providers;

use anyhow::Result;
use tracing::{debug, info};

use crate::providers::exchange_rate_api::{DEFAULT_BASE_URL, ExchangeRateApiProvider};

/// Runs the interactive converter over stdin/stdout against the live API.
pub async fn run(api_url: Option<&str>) -> Result<()> {
    info!("Currency converter starting...");

    let base_url = api_url.unwrap_or(DEFAULT_BASE_URL);
    debug!("Using rate API at {base_url}");

    let provider = ExchangeRateApiProvider::new(base_url);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    cli::prompt::run_loop(&mut input, &mut output, &provider).await
}
