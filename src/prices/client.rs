/// Shared HTTP client for price sources
use crate::errors::TreasuryError;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// HTTP client wrapper with a fixed request timeout
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout_secs: u64) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| format!("Failed to create HTTP client: {}", e))?;

        Ok(Self { client })
    }

    /// GET `url` and decode the body as JSON
    ///
    /// Transport failures, non-2xx statuses and undecodable bodies are all
    /// reported as a `PriceFeed` error for `source_name`.
    pub async fn get_json(&self, source_name: &str, url: &str) -> Result<Value, TreasuryError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| TreasuryError::price_feed(source_name, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TreasuryError::price_feed(
                source_name,
                format!("HTTP {}", status.as_u16()),
            ));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TreasuryError::price_feed(source_name, format!("Invalid JSON: {}", e)))
    }
}

/// Accept prices sent either as JSON numbers or as decimal strings
pub fn value_as_price(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|p| p.is_finite())
}
