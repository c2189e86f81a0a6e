//! Record construction: color registry, per-field context builders, the
//! printf-style message formatter, and the assembler that turns one logging
//! call into a `LogMetadata`.

pub mod color;
pub mod context;
pub mod message;

pub use color::color_for;
pub use context::{level_context, message_context, namespace_context, timestamp_context};
pub use message::{LogValue, format_message};

use crate::domain::{LogLevel, LogMetadata};

/// Assembles one immutable log record.
///
/// Builds the four field contexts and joins their styled renderings with
/// single spaces, in the order level, namespace, timestamp (when
/// `include_timestamp`), message. The plain fields are populated from the
/// same contexts. Infallible: malformed arguments degrade to their textual
/// representation inside the message formatter.
pub fn assemble(
    level: LogLevel,
    namespace: &str,
    args: Vec<LogValue>,
    include_timestamp: bool,
) -> LogMetadata {
    let level_ctx = level_context(level);
    let namespace_ctx = namespace_context(namespace);
    let message_ctx = message_context(&args);
    let timestamp_ctx = timestamp_context();

    let mut parts = vec![level_ctx.format, namespace_ctx.format];
    if include_timestamp {
        parts.push(timestamp_ctx.format);
    }
    parts.push(message_ctx.format);

    LogMetadata {
        label: level.as_str().to_string(),
        namespace: namespace_ctx.text,
        msg: message_ctx.text,
        timestamp: timestamp_ctx.text,
        args,
        fmt: parts.join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log_args;
    use serial_test::serial;

    #[test]
    fn test_assemble_populates_plain_fields() {
        let meta = assemble(
            LogLevel::Error,
            "db",
            log_args!["connection failed: %s", "timeout"],
            true,
        );

        assert_eq!(meta.label, "ERROR");
        assert_eq!(meta.namespace, "db");
        assert_eq!(meta.msg, "connection failed: timeout");
        assert_eq!(meta.args.len(), 2);
        assert!(meta.fmt.contains("ERROR"));
        assert!(meta.fmt.contains("db"));
        assert!(meta.fmt.contains("connection failed: timeout"));
    }

    #[test]
    #[serial(colored_override)]
    fn test_assemble_honors_timestamp_flag() {
        colored::control::set_override(false);
        let with_ts = assemble(LogLevel::Info, "app", log_args!["up"], true);
        let without_ts = assemble(LogLevel::Info, "app", log_args!["up"], false);
        colored::control::unset_override();

        // With colors suppressed the console line is exactly the space-joined
        // plain fields.
        assert_eq!(without_ts.fmt, "INFO app up");
        assert_eq!(with_ts.fmt.split(' ').count(), 5);
        // The timestamp field itself is always captured in the record.
        assert!(!without_ts.timestamp.is_empty());
    }
}
