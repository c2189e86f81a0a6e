#![deny(warnings, rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned,
    clippy::inconsistent_struct_constructor
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::cast_possible_truncation, // %d truncation of floats is the documented behavior
    clippy::missing_errors_doc,       // Internal API
    clippy::missing_panics_doc,       // Internal API
    clippy::module_name_repetitions,  // e.g. LoggerConfig in logger module
    clippy::must_use_candidate        // Annotated selectively on critical APIs
)]

pub mod domain;
pub mod format;
pub mod logger;
pub mod sink;

// Re-export main types for easy access
pub use domain::{LogContext, LogError, LogLevel, LogMetadata};
pub use format::{LogValue, assemble, format_message};
pub use logger::{ConfigError, Logger, LoggerConfig, WriteConfig};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
