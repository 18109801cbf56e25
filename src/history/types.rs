/// Transfer event model
///
/// Field names on the wire follow what the site's front end already reads
/// (`type`, `amountFormatted`, `url`).
use crate::config::TreasuryConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    #[serde(rename = "sol_transfer")]
    Native,
    #[serde(rename = "dorito")]
    TrackedToken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

impl Direction {
    /// `In` for a strictly positive delta
    pub fn from_delta(delta: f64) -> Self {
        if delta > 0.0 {
            Direction::In
        } else {
            Direction::Out
        }
    }

    pub fn sign(&self) -> char {
        match self {
            Direction::In => '+',
            Direction::Out => '-',
        }
    }
}

/// One classified balance change of the treasury
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferEvent {
    pub signature: String,
    /// Seconds since epoch, 0 when unknown
    #[serde(rename = "blockTime")]
    pub block_time: i64,
    #[serde(rename = "type")]
    pub asset_kind: AssetKind,
    pub direction: Direction,
    /// Exact magnitude of the change
    pub amount: f64,
    #[serde(rename = "amountFormatted")]
    pub display_amount: String,
    #[serde(rename = "url")]
    pub link: String,
}

/// What one resolver run needs to know about the tracked wallet
#[derive(Debug, Clone, PartialEq)]
pub struct HistorySettings {
    pub address: String,
    pub token_mint: String,
    pub native_symbol: String,
    pub token_symbol: String,
    pub explorer_tx_url: String,
    pub signature_limit: usize,
    pub max_events: usize,
}

impl From<&TreasuryConfig> for HistorySettings {
    fn from(config: &TreasuryConfig) -> Self {
        Self {
            address: config.address.clone(),
            token_mint: config.token_mint.clone(),
            native_symbol: config.native_symbol.clone(),
            token_symbol: config.token_symbol.clone(),
            explorer_tx_url: config.explorer_tx_url.clone(),
            signature_limit: config.signature_limit,
            max_events: config.max_events,
        }
    }
}

impl HistorySettings {
    pub fn explorer_link(&self, signature: &str) -> String {
        format!("{}{}", self.explorer_tx_url, signature)
    }
}

/// Result of one uncached resolver run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistorySnapshot {
    pub events: Vec<TransferEvent>,
    /// Signatures whose transaction could not be fetched or parsed
    pub skipped: usize,
}

/// What the endpoint serves
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryReport {
    pub events: Vec<TransferEvent>,
    pub skipped: usize,
    pub cached: bool,
}
