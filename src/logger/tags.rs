/// Log tags identifying the subsystem that produced a line

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogTag {
    System,
    Config,
    Webserver,
    Rpc,
    History,
    Balance,
    Pricing,
    Cache,
}

impl LogTag {
    pub const ALL: [LogTag; 8] = [
        LogTag::System,
        LogTag::Config,
        LogTag::Webserver,
        LogTag::Rpc,
        LogTag::History,
        LogTag::Balance,
        LogTag::Pricing,
        LogTag::Cache,
    ];

    /// Key used by the `--debug-<key>` command-line flag
    pub fn to_debug_key(&self) -> String {
        self.to_plain_string().to_lowercase()
    }

    /// Uncolored tag name
    pub fn to_plain_string(&self) -> String {
        match self {
            LogTag::System => "SYSTEM",
            LogTag::Config => "CONFIG",
            LogTag::Webserver => "WEBSERVER",
            LogTag::Rpc => "RPC",
            LogTag::History => "HISTORY",
            LogTag::Balance => "BALANCE",
            LogTag::Pricing => "PRICING",
            LogTag::Cache => "CACHE",
        }
        .to_string()
    }
}
