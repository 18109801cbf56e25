/// In-memory response caching
///
/// - `clock`: injectable time source
/// - `manager`: single-slot TTL cache used by both resolvers
mod clock;
mod manager;

pub use clock::{Clock, ManualClock, SystemClock};
pub use manager::{CacheEntry, CacheMetrics, SnapshotCache};
