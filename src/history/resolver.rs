/// Treasury history resolver
///
/// Lists recent signatures for the treasury, fetches each transaction in
/// turn, folds the per-transaction results into one ordered event list and
/// keeps the result in a single-slot TTL cache.
use super::extract::extract_events;
use super::types::{AssetKind, HistoryReport, HistorySettings, HistorySnapshot, TransferEvent};
use crate::cache::{Clock, SnapshotCache};
use crate::errors::TreasuryError;
use crate::logger::{self, LogTag};
use crate::rpc::LedgerService;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex as AsyncMutex;

/// Result of processing one signature
pub type SignatureOutcome = Result<Vec<TransferEvent>, TreasuryError>;

/// Collect successful outcomes in order, count and log the failures
pub fn fold_outcomes(outcomes: Vec<SignatureOutcome>) -> (Vec<TransferEvent>, usize) {
    outcomes
        .into_iter()
        .fold((Vec::new(), 0), |(mut events, skipped), outcome| match outcome {
            Ok(found) => {
                events.extend(found);
                (events, skipped)
            }
            Err(e) => {
                logger::debug(LogTag::History, &format!("Skipping {}", e));
                (events, skipped + 1)
            }
        })
}

/// Keep the first event for each (signature, asset kind)
pub fn dedupe_events(events: Vec<TransferEvent>) -> Vec<TransferEvent> {
    let mut seen: HashSet<(String, AssetKind)> = HashSet::new();
    events
        .into_iter()
        .filter(|e| seen.insert((e.signature.clone(), e.asset_kind)))
        .collect()
}

/// Newest first; unknown block time (0) after everything else. Stable.
pub fn sort_events(events: &mut [TransferEvent]) {
    events.sort_by(|a, b| match (a.block_time, b.block_time) {
        (0, 0) => std::cmp::Ordering::Equal,
        (0, _) => std::cmp::Ordering::Greater,
        (_, 0) => std::cmp::Ordering::Less,
        (x, y) => y.cmp(&x),
    });
}

/// Dedupe, order and cap a folded event list
pub fn finalize(events: Vec<TransferEvent>, max_events: usize) -> Vec<TransferEvent> {
    let mut events = dedupe_events(events);
    sort_events(&mut events);
    events.truncate(max_events);
    events
}

/// One uncached run against the ledger
///
/// Only a failed signature listing fails the run; every per-signature
/// failure is skipped and counted.
pub async fn resolve_history(
    ledger: &dyn LedgerService,
    settings: &HistorySettings,
) -> Result<HistorySnapshot, TreasuryError> {
    let signatures = ledger
        .list_recent_signatures(&settings.address, settings.signature_limit)
        .await
        .map_err(|e| TreasuryError::UpstreamBatch(e.to_string()))?;

    logger::debug(
        LogTag::History,
        &format!("Fetched {} signatures for {}", signatures.len(), settings.address),
    );

    let mut outcomes: Vec<SignatureOutcome> = Vec::with_capacity(signatures.len());
    for info in &signatures {
        let signature = info.signature.as_str();
        let outcome = match ledger.get_parsed_transaction(signature).await {
            Ok(Some(tx)) => extract_events(signature, &tx, settings),
            Ok(None) => Err(TreasuryError::per_transaction(signature, "transaction not found")),
            Err(e) => Err(TreasuryError::per_transaction(signature, e.to_string())),
        };
        outcomes.push(outcome);
    }

    let (events, skipped) = fold_outcomes(outcomes);
    let events = finalize(events, settings.max_events);

    if skipped > 0 {
        logger::warning(
            LogTag::History,
            &format!(
                "{} of {} transactions skipped while building history",
                skipped,
                signatures.len()
            ),
        );
    }

    Ok(HistorySnapshot { events, skipped })
}

/// Cached history endpoint backend
pub struct HistoryResolver {
    ledger: Arc<dyn LedgerService>,
    settings: HistorySettings,
    cache: SnapshotCache<HistorySnapshot>,
    clock: Arc<dyn Clock>,
    refresh_lock: AsyncMutex<()>,
}

impl HistoryResolver {
    pub fn new(
        ledger: Arc<dyn LedgerService>,
        settings: HistorySettings,
        ttl: Duration,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            ledger,
            settings,
            cache: SnapshotCache::new(ttl),
            clock,
            refresh_lock: AsyncMutex::new(()),
        }
    }

    pub fn cache(&self) -> &SnapshotCache<HistorySnapshot> {
        &self.cache
    }

    /// Serve from cache while fresh, otherwise refresh
    ///
    /// Concurrent misses wait on the refresh lock and then find the entry the
    /// first caller stored. A failed refresh leaves the cache untouched.
    pub async fn resolve(&self) -> Result<HistoryReport, TreasuryError> {
        if let Some(entry) = self.cache.get_with(self.clock.as_ref()) {
            return Ok(Self::report(entry.value, true));
        }

        let _guard = self.refresh_lock.lock().await;

        let started_at = self.clock.now();
        if let Some(entry) = self.cache.peek(started_at) {
            return Ok(Self::report(entry.value, true));
        }

        logger::debug(LogTag::Cache, "History cache miss, refreshing");

        let snapshot = resolve_history(self.ledger.as_ref(), &self.settings).await?;
        self.cache.set(snapshot.clone(), started_at);

        logger::info(
            LogTag::History,
            &format!(
                "History refreshed: {} events, {} skipped",
                snapshot.events.len(),
                snapshot.skipped
            ),
        );

        Ok(Self::report(snapshot, false))
    }

    fn report(snapshot: HistorySnapshot, cached: bool) -> HistoryReport {
        HistoryReport {
            events: snapshot.events,
            skipped: snapshot.skipped,
            cached,
        }
    }
}
