/// Logger configuration derived from command-line flags
use super::levels::LogLevel;
use super::tags::LogTag;
use crate::arguments;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Highest level that is printed (Debug still needs a per-tag flag)
    pub min_level: LogLevel,
    /// Tags with `--debug-<tag>` enabled
    pub debug_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Debug,
            debug_tags: HashSet::new(),
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Snapshot of the current logger configuration
pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Replace the logger configuration
pub fn set_logger_config(config: LoggerConfig) {
    match LOGGER_CONFIG.write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

/// Build the configuration from `--quiet`, `--debug-all` and `--debug-<tag>` flags
pub fn init_from_args() {
    let mut config = LoggerConfig::default();

    if arguments::has_arg("--quiet") {
        config.min_level = LogLevel::Warning;
    }

    let debug_all = arguments::has_arg("--debug-all");
    for tag in LogTag::ALL.iter() {
        let key = tag.to_debug_key();
        if debug_all || arguments::has_arg(&format!("--debug-{}", key)) {
            config.debug_tags.insert(key);
        }
    }

    set_logger_config(config);
}

/// Whether debug output is enabled for this tag
pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    get_logger_config().debug_tags.contains(&tag.to_debug_key())
}
