use crate::config_struct;

config_struct! {
    /// Price feed endpoints
    pub struct PricesConfig {
        /// Primary SOL/USD source
        coingecko_url: String =
            "https://api.coingecko.com/api/v3/simple/price?ids=solana&vs_currencies=usd".to_string(),

        /// Fallback SOL/USD source
        binance_url: String = "https://api.binance.com/api/v3/ticker/price?symbol=SOLUSDT".to_string(),

        /// Token/USD source; the mint is appended as the `ids` value
        jupiter_url: String = "https://lite-api.jup.ag/price/v3?ids=".to_string(),

        /// Per-request timeout
        timeout_secs: u64 = 10,
    }
}
