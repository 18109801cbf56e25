/// Treasury balance snapshot with USD valuation
pub mod resolver;
pub mod types;

pub use resolver::BalanceResolver;
pub use types::{BalanceReport, BalanceSnapshot};
