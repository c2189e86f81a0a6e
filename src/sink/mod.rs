//! Output sinks: append-only destinations for rendered log lines.

pub mod console;
pub mod file;

pub use console::ConsoleSink;
pub use file::FileSink;

use std::io;

/// An append-only destination for rendered log lines.
///
/// `append` writes `line` followed by a line break. Implementations do not
/// retry or queue; a failed write surfaces as the underlying `io::Error`.
pub trait LogSink {
    fn append(&mut self, line: &str) -> io::Result<()>;
}
