use serde::{Deserialize, Serialize};

/// Treasury holdings and their USD value at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSnapshot {
    pub sol_balance: f64,
    /// None when every SOL price source failed
    pub sol_price: Option<f64>,
    #[serde(rename = "solValueUSD")]
    pub sol_value_usd: f64,
    pub token_balance: f64,
    pub token_price: f64,
    #[serde(rename = "tokenValueUSD")]
    pub token_value_usd: f64,
    pub total_value: f64,
    /// Milliseconds since epoch when the snapshot was computed
    pub timestamp: i64,
}

impl BalanceSnapshot {
    /// Derive USD values from balances and prices; a missing SOL price counts as 0
    pub fn compute(
        sol_balance: f64,
        sol_price: Option<f64>,
        token_balance: f64,
        token_price: f64,
        timestamp: i64,
    ) -> Self {
        let sol_value_usd = sol_balance * sol_price.unwrap_or(0.0);
        let token_value_usd = token_balance * token_price;
        Self {
            sol_balance,
            sol_price,
            sol_value_usd,
            token_balance,
            token_price,
            token_value_usd,
            total_value: sol_value_usd + token_value_usd,
            timestamp,
        }
    }
}

/// What the balance endpoint serves
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceReport {
    #[serde(flatten)]
    pub snapshot: BalanceSnapshot,
    pub cached: bool,
    /// Whole seconds since the snapshot was computed, only on cache hits
    #[serde(rename = "cacheAge", skip_serializing_if = "Option::is_none")]
    pub cache_age: Option<u64>,
}
