/// Balance snapshot resolver
///
/// Every lookup degrades on its own: a failed price or balance only zeroes
/// (or nulls) its own field, so a snapshot is always produced.
use super::types::{BalanceReport, BalanceSnapshot};
use crate::cache::{Clock, SnapshotCache};
use crate::errors::TreasuryError;
use crate::logger::{self, LogTag};
use crate::prices::PriceFeed;
use crate::rpc::LedgerService;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex as AsyncMutex;

pub struct BalanceResolver {
    ledger: Arc<dyn LedgerService>,
    sol_price_feed: Arc<dyn PriceFeed>,
    token_price_feed: Arc<dyn PriceFeed>,
    address: String,
    token_mint: String,
    cache: SnapshotCache<BalanceSnapshot>,
    clock: Arc<dyn Clock>,
    refresh_lock: AsyncMutex<()>,
}

fn degrade<T>(result: Result<T, TreasuryError>, default: T) -> T {
    result.unwrap_or_else(|e| {
        logger::warning(LogTag::Balance, &e.to_string());
        default
    })
}

impl BalanceResolver {
    pub fn new(
        ledger: Arc<dyn LedgerService>,
        sol_price_feed: Arc<dyn PriceFeed>,
        token_price_feed: Arc<dyn PriceFeed>,
        address: &str,
        token_mint: &str,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            ledger,
            sol_price_feed,
            token_price_feed,
            address: address.to_string(),
            token_mint: token_mint.to_string(),
            cache: SnapshotCache::new(ttl),
            clock,
            refresh_lock: AsyncMutex::new(()),
        }
    }

    pub fn cache(&self) -> &SnapshotCache<BalanceSnapshot> {
        &self.cache
    }

    pub async fn resolve(&self) -> BalanceReport {
        let now = self.clock.now();
        if let Some(entry) = self.cache.get(now) {
            let age = entry.age_secs(now);
            return BalanceReport {
                snapshot: entry.value,
                cached: true,
                cache_age: Some(age),
            };
        }

        let _guard = self.refresh_lock.lock().await;

        let started_at = self.clock.now();
        if let Some(entry) = self.cache.peek(started_at) {
            let age = entry.age_secs(started_at);
            return BalanceReport {
                snapshot: entry.value,
                cached: true,
                cache_age: Some(age),
            };
        }

        let snapshot = self.compute(started_at.timestamp_millis()).await;
        self.cache.set(snapshot.clone(), started_at);

        logger::debug(
            LogTag::Balance,
            &format!(
                "Balance refreshed: {:.4} SOL, {:.2} tokens, ${:.2} total",
                snapshot.sol_balance, snapshot.token_balance, snapshot.total_value
            ),
        );

        BalanceReport {
            snapshot,
            cached: false,
            cache_age: None,
        }
    }

    /// Uncached snapshot; lookups run concurrently
    pub async fn compute(&self, timestamp: i64) -> BalanceSnapshot {
        let (sol_price, sol_balance, token_balance, token_price) = tokio::join!(
            self.sol_price_feed.fetch_price(),
            self.ledger.get_sol_balance(&self.address),
            self.ledger.get_token_balance(&self.address, &self.token_mint),
            self.token_price_feed.fetch_price(),
        );

        let sol_price = sol_price
            .map_err(|e| logger::warning(LogTag::Balance, &format!("SOL price: {}", e)))
            .ok();
        let sol_balance = degrade(
            sol_balance.map_err(|e| TreasuryError::balance_feed("SOL", e.to_string())),
            0.0,
        );
        let token_balance = degrade(
            token_balance.map_err(|e| TreasuryError::balance_feed("token", e.to_string())),
            0.0,
        );
        let token_price = degrade(token_price, 0.0);

        BalanceSnapshot::compute(sol_balance, sol_price, token_balance, token_price, timestamp)
    }
}
