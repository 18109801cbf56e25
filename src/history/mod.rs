/// Treasury transaction history
///
/// - `types`: event model and resolver settings
/// - `format`: amount display and dust threshold
/// - `extract`: balance deltas of one parsed transaction
/// - `resolver`: signature batch, aggregation and caching
pub mod extract;
pub mod format;
pub mod resolver;
pub mod types;

pub use resolver::{resolve_history, HistoryResolver};
pub use types::{AssetKind, Direction, HistoryReport, HistorySettings, HistorySnapshot, TransferEvent};
