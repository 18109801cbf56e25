//! Log formatting and output with ANSI colors
//!
//! Handles:
//! - Colorized console output with tag and level formatting
//! - Broken pipe handling for piped commands

use super::levels::LogLevel;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stderr, stdout, ErrorKind, Write};

/// Log format widths for alignment
const TAG_WIDTH: usize = 10;
const LEVEL_WIDTH: usize = 7;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, level: LogLevel, message: &str) {
    let time = Local::now().format("%H:%M:%S").to_string();
    let line = format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        format_tag(&tag),
        format_level(level),
        format_message(level, message)
    );

    // Errors and warnings go to stderr so piped JSON output stays clean
    if level.is_problem() {
        print_safe(&mut stderr(), &line);
    } else {
        print_safe(&mut stdout(), &line);
    }
}

/// Format a tag with appropriate color
fn format_tag(tag: &LogTag) -> ColoredString {
    let name = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => name.bright_yellow().bold(),
        LogTag::Config => name.bright_white().bold(),
        LogTag::Webserver => name.bright_blue().bold(),
        LogTag::Rpc => name.bright_green().bold(),
        LogTag::History => name.bright_cyan().bold(),
        LogTag::Balance => name.bright_magenta().bold(),
        LogTag::Pricing => name.cyan().bold(),
        LogTag::Cache => name.blue().bold(),
    }
}

fn format_level(level: LogLevel) -> ColoredString {
    let name = format!("{:<width$}", level.as_str(), width = LEVEL_WIDTH);
    match level {
        LogLevel::Error => name.red().bold(),
        LogLevel::Warning => name.yellow().bold(),
        LogLevel::Info => name.green(),
        LogLevel::Debug => name.purple(),
    }
}

fn format_message(level: LogLevel, message: &str) -> ColoredString {
    match level {
        LogLevel::Error => message.red(),
        LogLevel::Warning => message.yellow(),
        LogLevel::Info => message.normal(),
        LogLevel::Debug => message.dimmed(),
    }
}

/// Write a line, silently giving up on a closed pipe
fn print_safe<W: Write>(out: &mut W, line: &str) {
    if let Err(e) = writeln!(out, "{}", line) {
        if e.kind() == ErrorKind::BrokenPipe {
            return;
        }
    }
    let _ = out.flush();
}
