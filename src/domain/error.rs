use thiserror::Error;

/// Top-level error type for logger construction and dispatch.
///
/// Sink failures are deliberately not translated: opening the log file and
/// writing a line both surface the underlying I/O error unwrapped. There is
/// no retry or queueing on the dispatch path.
#[derive(Error, Debug)]
pub enum LogError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
