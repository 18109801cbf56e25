//! Structured logging for the treasury API
//!
//! ## Usage
//!
//! ```rust
//! use treasury_api::logger::{self, LogTag};
//!
//! logger::error(LogTag::Rpc, "Connection failed");
//! logger::warning(LogTag::Pricing, "Primary price feed unavailable");
//! logger::info(LogTag::Webserver, "Listening on 127.0.0.1:8080");
//! logger::debug(LogTag::History, "Fetched 20 signatures"); // Only with --debug-history
//! ```
//!
//! Call [`init`] once at startup, after command-line arguments are available.

mod config;
mod core;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, init_from_args, set_logger_config, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger from command-line flags
pub fn init() {
    config::init_from_args();
}

/// Log at ERROR level (always shown)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (hidden by --quiet)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level
///
/// Only shown when the matching `--debug-<tag>` flag (or `--debug-all`) is given.
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Whether debug output is enabled for a tag, to skip building expensive messages
pub fn is_debug_enabled(tag: LogTag) -> bool {
    config::is_debug_enabled_for_tag(&tag)
}
