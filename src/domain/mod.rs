//! Domain layer for tint-log.
//!
//! Contains the canonical types shared across all modules:
//! - `LogLevel`: log severity (Debug/Info/Warn/Error/Fatal)
//! - `LogContext`: paired plain/styled rendering of one log-line field
//! - `LogMetadata`: the assembled record produced by one logging call
//! - `LogError`: top-level error type

pub mod context;
pub mod error;
pub mod log_level;
pub mod metadata;

pub use context::LogContext;
pub use error::LogError;
pub use log_level::LogLevel;
pub use metadata::LogMetadata;
