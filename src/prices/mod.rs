/// USD price sources
///
/// SOL is priced by CoinGecko with Binance as fallback; the tracked token by
/// Jupiter. Each source implements [`PriceFeed`].
pub mod binance;
pub mod client;
pub mod coingecko;
pub mod feed;
pub mod jupiter;

pub use binance::BinanceFeed;
pub use coingecko::CoinGeckoFeed;
pub use feed::{FallbackFeed, PriceFeed};
pub use jupiter::JupiterFeed;
