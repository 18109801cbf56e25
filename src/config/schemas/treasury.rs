use crate::config_struct;

config_struct! {
    /// The tracked treasury wallet and how its history is shaped
    pub struct TreasuryConfig {
        /// Treasury wallet address (base58)
        address: String = "DU36b69V7KHiABHZuSQ5EPi3BRjwrJ8tqair1a95LPSY".to_string(),

        /// Mint of the tracked token (base58)
        token_mint: String = "H6KgtksNwiEe3bBpAcXFcC7za3d3V9Y4inayFyCPyy4j".to_string(),

        /// Unit suffix for token amounts
        token_symbol: String = "DORITO".to_string(),

        /// Unit suffix for native amounts
        native_symbol: String = "SOL".to_string(),

        /// Number of recent signatures inspected per refresh
        signature_limit: usize = 20,

        /// Maximum number of events returned
        max_events: usize = 25,

        /// Explorer URL prefix; the signature is appended
        explorer_tx_url: String = "https://solscan.io/tx/".to_string(),
    }
}
