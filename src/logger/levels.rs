/// Log severities, most severe first
///
/// The derived ordering is used as a threshold: a line is printed when its
/// level is at or above the configured minimum severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warning,
    Info,
    /// Also requires the tag's `--debug-<tag>` flag
    Debug,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARNING",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Errors and warnings are written to stderr
    pub fn is_problem(&self) -> bool {
        *self <= LogLevel::Warning
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
