// Config schema submodule - one file per section

use crate::config_struct;

mod cache;
mod prices;
mod rpc;
mod treasury;
mod webserver;

pub use cache::*;
pub use prices::*;
pub use rpc::*;
pub use treasury::*;
pub use webserver::*;

// ============================================================================
// ROOT CONFIGURATION
// ============================================================================

config_struct! {
    /// Root configuration structure containing all sub-configurations
    pub struct Config {
        /// HTTP listener
        webserver: WebserverConfig = WebserverConfig::default(),

        /// Solana JSON-RPC endpoint
        rpc: RpcConfig = RpcConfig::default(),

        /// Tracked address, token and history shaping
        treasury: TreasuryConfig = TreasuryConfig::default(),

        /// Response cache lifetimes
        cache: CacheConfig = CacheConfig::default(),

        /// Price feed endpoints
        prices: PricesConfig = PricesConfig::default(),
    }
}
