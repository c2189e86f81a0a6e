use crate::format::LogValue;

/// The fully assembled, immutable result of one logging call.
///
/// This is the canonical record handed to the sinks: `fmt` is the styled
/// console line, while `label`/`namespace`/`timestamp`/`msg` are the plain
/// fields the file sink composes its line from.
#[derive(Debug, Clone)]
pub struct LogMetadata {
    /// Level name, upper-cased (e.g. `"ERROR"`).
    pub label: String,
    /// Plain namespace text.
    pub namespace: String,
    /// Merged message text.
    pub msg: String,
    /// ISO-8601 instant captured when the record was assembled.
    pub timestamp: String,
    /// Original arguments, preserved for downstream consumers.
    pub args: Vec<LogValue>,
    /// Styled single-line console rendering: level, namespace,
    /// optional timestamp, message, space-joined.
    pub fmt: String,
}
