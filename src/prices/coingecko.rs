/// CoinGecko simple price endpoint (SOL/USD)
///
/// Response shape: `{"solana":{"usd":142.5}}`
use super::client::{value_as_price, HttpClient};
use super::feed::PriceFeed;
use crate::errors::TreasuryError;
use async_trait::async_trait;
use serde_json::Value;

const SOURCE: &str = "coingecko";

pub struct CoinGeckoFeed {
    http_client: HttpClient,
    url: String,
}

impl CoinGeckoFeed {
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self, String> {
        Ok(Self {
            http_client: HttpClient::new(timeout_secs)?,
            url: url.to_string(),
        })
    }
}

/// `solana.usd`; a missing field is a failure
pub fn parse_price(body: &Value) -> Result<f64, TreasuryError> {
    body.get("solana")
        .and_then(|s| s.get("usd"))
        .and_then(value_as_price)
        .ok_or_else(|| TreasuryError::price_feed(SOURCE, "missing solana.usd"))
}

#[async_trait]
impl PriceFeed for CoinGeckoFeed {
    fn name(&self) -> &str {
        SOURCE
    }

    async fn fetch_price(&self) -> Result<f64, TreasuryError> {
        let body = self.http_client.get_json(SOURCE, &self.url).await?;
        parse_price(&body)
    }
}
