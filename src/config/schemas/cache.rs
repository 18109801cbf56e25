use crate::config_struct;

config_struct! {
    /// Response cache lifetimes
    pub struct CacheConfig {
        /// Treasury history TTL
        history_ttl_secs: u64 = 60,

        /// Balance snapshot TTL
        balance_ttl_secs: u64 = 30,
    }
}
