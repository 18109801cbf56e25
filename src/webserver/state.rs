/// Shared application state for the webserver
///
/// Holds the two resolvers behind the public endpoints. Each resolver owns
/// its own cache slot, so handlers only need shared references.
use crate::balance::BalanceResolver;
use crate::history::HistoryResolver;
use std::sync::Arc;

/// Shared application state passed to all route handlers
#[derive(Clone)]
pub struct AppState {
    pub history: Arc<HistoryResolver>,
    pub balance: Arc<BalanceResolver>,

    /// Server startup time
    pub startup_time: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(history: Arc<HistoryResolver>, balance: Arc<BalanceResolver>) -> Self {
        Self {
            history,
            balance,
            startup_time: chrono::Utc::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.startup_time)
            .num_seconds()
            .max(0) as u64
    }
}
