/// Configuration utilities - loading, environment overrides and validation
use super::schemas::Config;
use crate::errors::TreasuryError;
use crate::logger::{self, LogTag};

/// Environment variable that replaces `rpc.url`
pub const RPC_URL_ENV: &str = "SOLANA_RPC_URL";

/// Load configuration from a TOML file
///
/// A missing file is not an error: the schema defaults are used instead.
/// Environment overrides are applied and the result is validated.
pub fn load_config_from_path(path: &str) -> Result<Config, String> {
    let mut config = if std::path::Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file '{}': {}", path, e))?;

        parse_config(&contents).map_err(|e| format!("Failed to parse config file '{}': {}", path, e))?
    } else {
        logger::warning(
            LogTag::Config,
            &format!("Config file '{}' not found, using default values", path),
        );
        Config::default()
    };

    apply_env_overrides(&mut config, std::env::var(RPC_URL_ENV).ok());
    validate_config(&config).map_err(|e| e.to_string())?;

    Ok(config)
}

/// Parse a TOML document into a [`Config`], defaulting missing sections
pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str::<Config>(contents)
}

/// Apply environment overrides (`SOLANA_RPC_URL`)
pub fn apply_env_overrides(config: &mut Config, rpc_url: Option<String>) {
    if let Some(url) = rpc_url.filter(|u| !u.trim().is_empty()) {
        logger::debug(
            LogTag::Config,
            &format!("Using RPC URL from {}", RPC_URL_ENV),
        );
        config.rpc.url = url.trim().to_string();
    }
}

/// Validate a configuration before any client is built
pub fn validate_config(config: &Config) -> Result<(), TreasuryError> {
    validate_pubkey("treasury.address", &config.treasury.address)?;
    validate_pubkey("treasury.token_mint", &config.treasury.token_mint)?;

    for (name, value) in [
        ("rpc.url", &config.rpc.url),
        ("treasury.explorer_tx_url", &config.treasury.explorer_tx_url),
        ("prices.coingecko_url", &config.prices.coingecko_url),
        ("prices.binance_url", &config.prices.binance_url),
        ("prices.jupiter_url", &config.prices.jupiter_url),
    ] {
        url::Url::parse(value).map_err(|e| {
            TreasuryError::Configuration(format!("{} is not a valid URL ({}): {}", name, value, e))
        })?;
    }

    if config.treasury.signature_limit == 0 || config.treasury.signature_limit > 1000 {
        return Err(TreasuryError::Configuration(
            "treasury.signature_limit must be between 1 and 1000".to_string(),
        ));
    }
    if config.treasury.max_events == 0 {
        return Err(TreasuryError::Configuration(
            "treasury.max_events must be at least 1".to_string(),
        ));
    }
    if config.rpc.timeout_secs == 0 || config.prices.timeout_secs == 0 {
        return Err(TreasuryError::Configuration(
            "timeouts must be at least 1 second".to_string(),
        ));
    }

    Ok(())
}

/// A Solana address is base58 for exactly 32 bytes
fn validate_pubkey(name: &str, value: &str) -> Result<(), TreasuryError> {
    let bytes = bs58::decode(value)
        .into_vec()
        .map_err(|e| TreasuryError::Configuration(format!("{} is not base58: {}", name, e)))?;

    if bytes.len() != 32 {
        return Err(TreasuryError::Configuration(format!(
            "{} must decode to 32 bytes, got {}",
            name,
            bytes.len()
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.treasury.signature_limit, 20);
        assert_eq!(config.treasury.max_events, 25);
        assert_eq!(config.cache.history_ttl_secs, 60);
        assert_eq!(config.cache.balance_ttl_secs, 30);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[treasury]"));
        assert!(toml_str.contains("[cache]"));
        assert_eq!(parse_config(&toml_str).unwrap(), config);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = parse_config(
            r#"
            [webserver]
            port = 9090

            [treasury]
            token_symbol = "TEST"
            "#,
        )
        .unwrap();

        assert_eq!(config.webserver.port, 9090);
        assert_eq!(config.webserver.host, "127.0.0.1");
        assert_eq!(config.treasury.token_symbol, "TEST");
        assert_eq!(config.treasury.native_symbol, "SOL");
    }

    #[test]
    fn test_env_override() {
        let mut config = Config::default();
        apply_env_overrides(&mut config, Some("https://rpc.example.com".to_string()));
        assert_eq!(config.rpc.url, "https://rpc.example.com");

        let mut config = Config::default();
        apply_env_overrides(&mut config, Some("  ".to_string()));
        assert_eq!(config.rpc.url, Config::default().rpc.url);
    }

    #[test]
    fn test_rejects_bad_address() {
        let mut config = Config::default();
        config.treasury.address = "not-an-address".to_string();
        assert!(matches!(
            validate_config(&config),
            Err(TreasuryError::Configuration(_))
        ));

        let mut config = Config::default();
        config.treasury.token_mint = "1111".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_bad_limits_and_urls() {
        let mut config = Config::default();
        config.treasury.signature_limit = 0;
        assert!(validate_config(&config).is_err());

        let mut config = Config::default();
        config.rpc.url = "not a url".to_string();
        assert!(validate_config(&config).is_err());
    }
}
