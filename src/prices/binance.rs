/// Binance ticker endpoint (SOLUSDT), used when CoinGecko fails
///
/// Response shape: `{"symbol":"SOLUSDT","price":"142.50000000"}`
use super::client::{value_as_price, HttpClient};
use super::feed::PriceFeed;
use crate::errors::TreasuryError;
use async_trait::async_trait;
use serde_json::Value;

const SOURCE: &str = "binance";

pub struct BinanceFeed {
    http_client: HttpClient,
    url: String,
}

impl BinanceFeed {
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self, String> {
        Ok(Self {
            http_client: HttpClient::new(timeout_secs)?,
            url: url.to_string(),
        })
    }
}

pub fn parse_price(body: &Value) -> Result<f64, TreasuryError> {
    body.get("price")
        .and_then(value_as_price)
        .ok_or_else(|| TreasuryError::price_feed(SOURCE, "missing price"))
}

#[async_trait]
impl PriceFeed for BinanceFeed {
    fn name(&self) -> &str {
        SOURCE
    }

    async fn fetch_price(&self) -> Result<f64, TreasuryError> {
        let body = self.http_client.get_json(SOURCE, &self.url).await?;
        parse_price(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_string_price() {
        let body = json!({"symbol": "SOLUSDT", "price": "142.50000000"});
        assert_eq!(parse_price(&body).unwrap(), 142.5);
    }

    #[test]
    fn test_parse_error_body() {
        let body = json!({"code": -1121, "msg": "Invalid symbol."});
        assert!(parse_price(&body).is_err());
    }
}
