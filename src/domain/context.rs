/// Paired plain/styled representation of one log-line field.
///
/// `text` carries the unstyled content; `format` carries the same content
/// wrapped in ANSI styling for terminal display. Contexts are built once per
/// field and consumed immediately by the record assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogContext {
    pub text: String,
    pub format: String,
}

impl LogContext {
    pub fn new(text: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            format: format.into(),
        }
    }
}
