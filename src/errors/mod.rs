/// Error types for the treasury API
///
/// `TreasuryError` is the taxonomy the resolvers speak. Only `UpstreamBatch`
/// ever reaches a client; the other variants are degraded or skipped where
/// they occur and only show up in logs and counters.
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum TreasuryError {
    /// The signature list (or another whole-request query) could not be fetched
    #[error("{0}")]
    UpstreamBatch(String),

    /// A single transaction could not be fetched or parsed
    #[error("transaction {signature}: {message}")]
    PerTransaction { signature: String, message: String },

    /// One price source failed
    #[error("{source_name} price unavailable: {message}")]
    PriceFeed {
        source_name: String,
        message: String,
    },

    /// One balance lookup failed
    #[error("{what} balance unavailable: {message}")]
    BalanceFeed { what: String, message: String },

    /// Invalid configuration detected at startup
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl TreasuryError {
    pub fn per_transaction(signature: &str, message: impl Into<String>) -> Self {
        TreasuryError::PerTransaction {
            signature: signature.to_string(),
            message: message.into(),
        }
    }

    pub fn price_feed(source_name: &str, message: impl Into<String>) -> Self {
        TreasuryError::PriceFeed {
            source_name: source_name.to_string(),
            message: message.into(),
        }
    }

    pub fn balance_feed(what: &str, message: impl Into<String>) -> Self {
        TreasuryError::BalanceFeed {
            what: what.to_string(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = TreasuryError::UpstreamBatch("Request failed: 503".to_string());
        assert_eq!(err.to_string(), "Request failed: 503");

        let err = TreasuryError::per_transaction("5xSig", "missing meta");
        assert_eq!(err.to_string(), "transaction 5xSig: missing meta");

        let err = TreasuryError::price_feed("coingecko", "HTTP 429");
        assert_eq!(err.to_string(), "coingecko price unavailable: HTTP 429");
    }
}
