use anyhow::{anyhow, Context};
use std::sync::Arc;
use std::time::Duration;
use treasury_api::{
    arguments::{self, print_help},
    balance::BalanceResolver,
    cache::SystemClock,
    config::{self, Config},
    history::{HistoryResolver, HistorySettings},
    logger::{self, LogTag},
    prices::{BinanceFeed, CoinGeckoFeed, FallbackFeed, JupiterFeed, PriceFeed},
    rpc::RpcClient,
    webserver::{self, AppState},
};

/// Main entry point for the treasury API
///
/// Loads configuration, wires the ledger client, price feeds and resolvers,
/// then serves until Ctrl-C.
#[tokio::main]
async fn main() {
    logger::init();

    if arguments::is_help_requested() {
        print_help();
        std::process::exit(0);
    }

    if let Err(e) = run().await {
        logger::error(LogTag::System, &format!("{:#}", e));
        std::process::exit(1);
    }
}

fn load_config() -> anyhow::Result<Config> {
    let path = arguments::config_path();
    let mut config = config::load_config_from_path(&path).map_err(|e| anyhow!(e))?;

    if let Some(port) = arguments::port_override() {
        config.webserver.port = port;
    }

    Ok(config)
}

async fn run() -> anyhow::Result<()> {
    logger::info(LogTag::System, "Treasury API starting up...");

    let config = load_config().context("Invalid configuration")?;
    logger::info(
        LogTag::Config,
        &format!(
            "Tracking {} (token {}) via {}",
            config.treasury.address, config.treasury.token_mint, config.rpc.url
        ),
    );

    let ledger = Arc::new(
        RpcClient::new(&config.rpc.url, config.rpc.timeout_secs).map_err(|e| anyhow!(e))?,
    );
    let clock = Arc::new(SystemClock);

    let prices = &config.prices;
    let sol_price_feed: Arc<dyn PriceFeed> = Arc::new(FallbackFeed::new(
        Arc::new(CoinGeckoFeed::new(&prices.coingecko_url, prices.timeout_secs).map_err(|e| anyhow!(e))?),
        Arc::new(BinanceFeed::new(&prices.binance_url, prices.timeout_secs).map_err(|e| anyhow!(e))?),
    ));
    let token_price_feed: Arc<dyn PriceFeed> = Arc::new(
        JupiterFeed::new(
            &prices.jupiter_url,
            &config.treasury.token_mint,
            prices.timeout_secs,
        )
        .map_err(|e| anyhow!(e))?,
    );

    let history = Arc::new(HistoryResolver::new(
        ledger.clone(),
        HistorySettings::from(&config.treasury),
        Duration::from_secs(config.cache.history_ttl_secs),
        clock.clone(),
    ));
    let balance = Arc::new(BalanceResolver::new(
        ledger,
        sol_price_feed,
        token_price_feed,
        &config.treasury.address,
        &config.treasury.token_mint,
        Duration::from_secs(config.cache.balance_ttl_secs),
        clock,
    ));

    ctrlc::set_handler(|| {
        logger::info(LogTag::System, "Shutdown requested");
        webserver::shutdown();
    })
    .context("Failed to install Ctrl-C handler")?;

    let state = Arc::new(AppState::new(history, balance));
    webserver::start_server(&config.webserver, state)
        .await
        .map_err(|e| anyhow!(e))?;

    logger::info(LogTag::System, "Treasury API stopped");
    Ok(())
}
