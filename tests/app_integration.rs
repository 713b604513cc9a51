use std::io::Cursor;
use tracing::info;

// Adds automatic logging to test
mod test_utils {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server(base: &str, mock_response: &str) -> wiremock::MockServer {
        let mock_server = MockServer::start().await;
        let url_path = format!("/{base}");

        Mock::given(method("GET"))
            .and(path(&url_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }
}

#[test_log::test(tokio::test)]
async fn test_full_conversion_flow_with_mock() {
    use fxc::cli::prompt::run_loop;
    use fxc::providers::exchange_rate_api::ExchangeRateApiProvider;

    let mock_response = r#"{
        "base": "USD",
        "date": "2024-01-01",
        "rates": {
            "EUR": 0.9,
            "INR": 83.12
        }
    }"#;

    let mock_server = test_utils::create_mock_server("USD", mock_response).await;
    let provider = ExchangeRateApiProvider::new(&mock_server.uri());

    let mut input = Cursor::new("10\nusd\neur\nno\n".to_string());
    let mut output = Vec::new();

    info!("Driving interactive loop against mock rate server");
    let result = run_loop(&mut input, &mut output, &provider).await;
    assert!(result.is_ok(), "Loop failed with: {:?}", result.err());

    let output = String::from_utf8(output).expect("Output should be valid UTF-8");
    assert!(
        output.contains("10.0 USD is equal to 9.0 EUR."),
        "Unexpected output: {output}"
    );
    assert!(output.contains("Thank you for using the currency converter!"));
}

#[test_log::test(tokio::test)]
async fn test_fetch_failure_keeps_loop_alive() {
    use fxc::cli::prompt::run_loop;
    use fxc::providers::exchange_rate_api::ExchangeRateApiProvider;

    let mock_server = wiremock::MockServer::start().await;
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .respond_with(wiremock::ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let provider = ExchangeRateApiProvider::new(&mock_server.uri());

    // First conversion fails on the server error, second input round exits
    let mut input = Cursor::new("10\nUSD\nEUR\nno\n".to_string());
    let mut output = Vec::new();

    let result = run_loop(&mut input, &mut output, &provider).await;
    assert!(result.is_ok(), "Loop failed with: {:?}", result.err());

    let output = String::from_utf8(output).expect("Output should be valid UTF-8");
    assert!(
        output.contains("Conversion failed due to an error."),
        "Unexpected output: {output}"
    );
}

#[test_log::test(tokio::test)]
async fn test_real_exchange_rate_api() {
    use fxc::core::rates::RateProvider;
    use fxc::providers::exchange_rate_api::{DEFAULT_BASE_URL, ExchangeRateApiProvider};

    let provider = ExchangeRateApiProvider::new(DEFAULT_BASE_URL);

    let base = "USD";
    info!(?base, "Fetching exchange rates from live API");

    let result = provider.fetch_rates(base).await;

    match result {
        Ok(rates) => {
            info!(count = rates.len(), "Received successful rates response");
            assert!(!rates.is_empty(), "Rate table should not be empty");
            let eur = rates.get("EUR").copied().unwrap_or_default();
            assert!(eur > 0.0, "EUR rate should be positive");

            info!("Real API Response - {} to EUR: {}", base, eur);
        }
        Err(e) => {
            tracing::error!("Rates API request failed: {e}\n{e:?}");
            panic!("Rates API request failed: {e}");
        }
    }
}
