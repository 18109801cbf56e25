/// Single-slot in-memory cache with TTL
///
/// Holds at most one value. A write always replaces the previous entry in
/// full; entries are never merged or individually removed.
use super::clock::Clock;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::time::Duration;

/// Cached value and the moment it was computed
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<T> {
    pub value: T,
    pub computed_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, computed_at: DateTime<Utc>) -> Self {
        Self { value, computed_at }
    }

    /// Fresh while `now - computed_at < ttl`
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        let elapsed_ms = now.signed_duration_since(self.computed_at).num_milliseconds();
        elapsed_ms >= ttl.as_millis() as i64
    }

    /// Whole seconds since the entry was computed
    pub fn age_secs(&self, now: DateTime<Utc>) -> u64 {
        now.signed_duration_since(self.computed_at)
            .num_seconds()
            .max(0) as u64
    }
}

/// Cache metrics for monitoring
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheMetrics {
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub inserts: u64,
}

impl CacheMetrics {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug)]
struct Slot<T> {
    entry: Option<CacheEntry<T>>,
    metrics: CacheMetrics,
}

/// One-entry TTL cache
#[derive(Debug)]
pub struct SnapshotCache<T: Clone> {
    ttl: Duration,
    slot: Mutex<Slot<T>>,
}

impl<T: Clone> SnapshotCache<T> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slot: Mutex::new(Slot {
                entry: None,
                metrics: CacheMetrics::default(),
            }),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh entry, or None when empty or expired
    pub fn get(&self, now: DateTime<Utc>) -> Option<CacheEntry<T>> {
        let mut slot = self.slot.lock();

        let fresh = match &slot.entry {
            Some(entry) if !entry.is_expired(now, self.ttl) => Some(entry.clone()),
            Some(_) => {
                slot.metrics.expirations += 1;
                None
            }
            None => None,
        };

        if fresh.is_some() {
            slot.metrics.hits += 1;
        } else {
            slot.metrics.misses += 1;
        }

        fresh
    }

    /// Fresh entry without counting a hit or miss
    ///
    /// For re-checks after a refresh lock is taken, so one request counts once.
    pub fn peek(&self, now: DateTime<Utc>) -> Option<CacheEntry<T>> {
        self.slot
            .lock()
            .entry
            .as_ref()
            .filter(|entry| !entry.is_expired(now, self.ttl))
            .cloned()
    }

    /// Store a value, replacing whatever was there
    pub fn set(&self, value: T, now: DateTime<Utc>) {
        let mut slot = self.slot.lock();
        slot.entry = Some(CacheEntry::new(value, now));
        slot.metrics.inserts += 1;
    }

    /// True when the slot is empty or its entry is stale
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match &self.slot.lock().entry {
            Some(entry) => entry.is_expired(now, self.ttl),
            None => true,
        }
    }

    /// Convenience wrapper reading the time from a [`Clock`]
    pub fn get_with(&self, clock: &dyn Clock) -> Option<CacheEntry<T>> {
        self.get(clock.now())
    }

    pub fn metrics(&self) -> CacheMetrics {
        self.slot.lock().metrics.clone()
    }
}
