/// Level and tag filtering in front of the console writer
use super::config::{get_logger_config, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Errors always pass; debug lines need their tag enabled as well
pub fn passes_filter(config: &LoggerConfig, tag: LogTag, level: LogLevel) -> bool {
    match level {
        LogLevel::Error => true,
        LogLevel::Debug => config.debug_tags.contains(&tag.to_debug_key()),
        _ => level <= config.min_level,
    }
}

pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if passes_filter(&get_logger_config(), tag, level) {
        super::format::format_and_log(tag, level, message);
    }
}
