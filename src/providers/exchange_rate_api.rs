use anyhow::{Result, anyhow};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::debug;

use crate::rate_provider::ExchangeRateProvider;

/// Client for the public exchange-rate API serving `GET /v4/latest/{base}`.
pub struct ExchangeRateApiProvider {
    base_url: String,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str) -> Self {
        ExchangeRateApiProvider {
            base_url: base_url.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    rates: HashMap<String, f64>,
}

#[async_trait]
impl ExchangeRateProvider for ExchangeRateApiProvider {
    async fn get_rate(&self, from: &str, to: &str) -> Result<f64> {
        let url = format!("{}/v4/latest/{}", self.base_url, from);
        debug!("Requesting exchange rates from {}", url);

        let client = reqwest::Client::builder()
            .user_agent("fxtoggle/0.1")
            .build()?;

        let response = client
            .get(&url)
            .send()
            .await
            .map_err(|e| anyhow!("Request error: {} for base currency: {} URL: {}", e, from, url))?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "HTTP error: {} for base currency: {}",
                response.status(),
                from
            ));
        }

        let text = response.text().await?;

        if text.trim().is_empty() {
            return Err(anyhow!("Received empty response for base currency: {}", from));
        }

        let data: LatestRatesResponse = serde_json::from_str(&text)
            .map_err(|e| anyhow!("Failed to parse JSON response for {}: {}", from, e))?;

        data.rates
            .get(to)
            .copied()
            .ok_or_else(|| anyhow!("No {} rate found in {} base rates", to, from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub async fn create_mock_server(base_currency: &str, mock_response: &str) -> MockServer {
        let mock_server = MockServer::start().await;
        let request_path = format!("/v4/latest/{base_currency}");

        Mock::given(method("GET"))
            .and(path(request_path))
            .respond_with(ResponseTemplate::new(200).set_body_string(mock_response))
            .mount(&mock_server)
            .await;

        mock_server
    }

    #[tokio::test]
    async fn test_successful_rate_fetch() {
        let mock_response = r#"{
            "base": "ZAR",
            "rates": {
                "USD": 0.0531,
                "EUR": 0.0489,
                "GBP": 0.0421
            }
        }"#;

        let mock_server = create_mock_server("ZAR", mock_response).await;

        let provider = ExchangeRateApiProvider::new(&mock_server.uri());
        let rate = provider.get_rate("ZAR", "USD").await.unwrap();
        assert_eq!(rate, 0.0531);
    }

    #[tokio::test]
    async fn test_missing_target_rate() {
        let mock_response = r#"{"rates": {"EUR": 0.0489}}"#;
        let mock_server = create_mock_server("ZAR", mock_response).await;

        let provider = ExchangeRateApiProvider::new(&mock_server.uri());
        let result = provider.get_rate("ZAR", "USD").await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "No USD rate found in ZAR base rates"
        );
    }

    #[tokio::test]
    async fn test_api_error_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v4/latest/ZAR"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let provider = ExchangeRateApiProvider::new(&mock_server.uri());
        let result = provider.get_rate("ZAR", "USD").await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "HTTP error: 500 Internal Server Error for base currency: ZAR"
        );
    }

    #[tokio::test]
    async fn test_api_malformed_response() {
        // "rate" instead of "rates"
        let mock_response = r#"{"rate": {"USD": 0.0531}}"#;
        let mock_server = create_mock_server("ZAR", mock_response).await;

        let provider = ExchangeRateApiProvider::new(&mock_server.uri());
        let result = provider.get_rate("ZAR", "USD").await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse JSON response for ZAR")
        );
    }

    #[tokio::test]
    async fn test_api_empty_response() {
        let mock_server = create_mock_server("ZAR", "").await;

        let provider = ExchangeRateApiProvider::new(&mock_server.uri());
        let result = provider.get_rate("ZAR", "USD").await;
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().to_string(),
            "Received empty response for base currency: ZAR"
        );
    }
}
