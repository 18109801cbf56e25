/// Jupiter price API (tracked token/USD)
///
/// Two response shapes are accepted:
/// - v2: `{"data":{"<mint>":{"price":"0.0012"}}}`
/// - v3: `{"<mint>":{"usdPrice":0.0012}}`
use super::client::{value_as_price, HttpClient};
use super::feed::PriceFeed;
use crate::errors::TreasuryError;
use async_trait::async_trait;
use serde_json::Value;

const SOURCE: &str = "jupiter";

pub struct JupiterFeed {
    http_client: HttpClient,
    base_url: String,
    mint: String,
}

impl JupiterFeed {
    /// `base_url` ends with the query key; the mint is appended
    pub fn new(base_url: &str, mint: &str, timeout_secs: u64) -> Result<Self, String> {
        Ok(Self {
            http_client: HttpClient::new(timeout_secs)?,
            base_url: base_url.to_string(),
            mint: mint.to_string(),
        })
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, self.mint)
    }
}

pub fn parse_price(body: &Value, mint: &str) -> Result<f64, TreasuryError> {
    let v2 = body
        .get("data")
        .and_then(|d| d.get(mint))
        .and_then(|t| t.get("price"));
    let v3 = body.get(mint).and_then(|t| t.get("usdPrice"));

    v2.or(v3)
        .and_then(value_as_price)
        .ok_or_else(|| TreasuryError::price_feed(SOURCE, format!("no price for {}", mint)))
}

#[async_trait]
impl PriceFeed for JupiterFeed {
    fn name(&self) -> &str {
        SOURCE
    }

    async fn fetch_price(&self) -> Result<f64, TreasuryError> {
        let body = self.http_client.get_json(SOURCE, &self.url()).await?;
        parse_price(&body, &self.mint)
    }
}
