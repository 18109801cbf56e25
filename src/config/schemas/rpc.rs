use crate::config_struct;

config_struct! {
    /// Solana JSON-RPC endpoint configuration
    pub struct RpcConfig {
        /// RPC URL (overridden by the SOLANA_RPC_URL environment variable)
        url: String = "https://api.mainnet-beta.solana.com".to_string(),

        /// Per-request timeout
        timeout_secs: u64 = 20,
    }
}
