// Webserver configuration schema

use crate::config_struct;

config_struct! {
    /// HTTP listener configuration
    pub struct WebserverConfig {
        /// Host/IP address to bind (0.0.0.0 for all interfaces)
        host: String = "127.0.0.1".to_string(),

        /// Port to bind
        port: u16 = 8080,
    }
}
