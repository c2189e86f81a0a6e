use super::color::color_for;
use super::message::{LogValue, format_message};
use crate::domain::{LogContext, LogLevel};
use chrono::{Local, SecondsFormat, Utc};
use colored::Colorize;

/// Builds the level field: plain label plus its colorized rendering.
///
/// FATAL renders bright-white on the level color as a background so it
/// stands out from the foreground-only styling of the other levels.
pub fn level_context(level: LogLevel) -> LogContext {
    let text = level.as_str();
    let format = if level == LogLevel::Fatal {
        text.bright_white().on_color(color_for(level)).to_string()
    } else {
        text.color(color_for(level)).to_string()
    };

    LogContext::new(text, format)
}

/// Builds the namespace field in a bright neutral foreground style.
pub fn namespace_context(namespace: &str) -> LogContext {
    LogContext::new(namespace, namespace.bright_white().to_string())
}

/// Builds the message field by merging `args` printf-style.
pub fn message_context(args: &[LogValue]) -> LogContext {
    let text = format_message(args);
    let format = text.white().to_string();

    LogContext::new(text, format)
}

/// Builds the timestamp field from a single wall-clock capture: ISO-8601
/// text, with a dimmed/italic local-time rendering for the console.
pub fn timestamp_context() -> LogContext {
    let now = Utc::now();
    let text = now.to_rfc3339_opts(SecondsFormat::Millis, true);
    let local = now.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S");
    let format = local.to_string().dimmed().italic().to_string();

    LogContext::new(text, format)
}
