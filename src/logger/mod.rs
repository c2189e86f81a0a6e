//! The logger: owns configuration and sinks, exposes per-level calls, and
//! dispatches assembled records synchronously.

pub mod config;

pub use config::{ConfigError, LoggerConfig, WriteConfig};

use crate::domain::{LogError, LogLevel, LogMetadata};
use crate::format::{LogValue, assemble};
use crate::sink::{ConsoleSink, FileSink, LogSink};
use std::io::Write;
use std::path::Path;

/// Namespace used when neither the call site nor the configuration names one.
const FALLBACK_NAMESPACE: &str = "app";

/// A named logger dispatching to a console sink and an optional file sink.
///
/// Every call assembles a record inline and writes it to each enabled sink
/// before returning. The two sinks are independent: console output is gated
/// by `config.enable`, file output by the presence of an enabled `write`
/// configuration. The file is opened once at construction and held for the
/// logger's lifetime; an open failure surfaces from `new` untranslated.
pub struct Logger {
    name: String,
    config: LoggerConfig,
    console: ConsoleSink,
    file: Option<FileSink>,
}

impl Logger {
    pub fn new(name: impl Into<String>, config: LoggerConfig) -> Result<Self, LogError> {
        let file = match &config.write {
            Some(write) if write.enable => Some(FileSink::open(&write.dir, &write.filename)?),
            _ => None,
        };

        Ok(Self {
            name: name.into(),
            config,
            console: ConsoleSink::stdout(),
            file,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// Resolved path of the log file, when file output is enabled.
    pub fn log_file(&self) -> Option<&Path> {
        self.file.as_ref().map(FileSink::path)
    }

    /// Redirects console output to `out`. Embedding/test seam; file output
    /// is unaffected.
    pub fn set_console_writer(&mut self, out: Box<dyn Write + Send>) {
        self.console = ConsoleSink::new(out);
    }

    /// Assembles a record for `level` and dispatches it.
    ///
    /// Console line: the styled `fmt`, timestamp segment included iff
    /// `config.timestamp`. File line: `label namespace timestamp msg`, the
    /// timestamp always present. A sink write failure propagates without
    /// retry; the record is returned on success.
    pub fn log(
        &mut self,
        level: LogLevel,
        namespace: Option<&str>,
        args: Vec<LogValue>,
    ) -> Result<LogMetadata, LogError> {
        let namespace = namespace
            .or(self.config.namespace.as_deref())
            .unwrap_or(FALLBACK_NAMESPACE);
        let meta = assemble(level, namespace, args, self.config.timestamp);

        if self.config.enable {
            self.console.append(&meta.fmt)?;
        }

        if let Some(file) = &mut self.file {
            let line = format!(
                "{} {} {} {}",
                meta.label, meta.namespace, meta.timestamp, meta.msg
            );
            file.append(&line)?;
        }

        Ok(meta)
    }

    pub fn debug(
        &mut self,
        namespace: Option<&str>,
        args: Vec<LogValue>,
    ) -> Result<LogMetadata, LogError> {
        self.log(LogLevel::Debug, namespace, args)
    }

    pub fn info(
        &mut self,
        namespace: Option<&str>,
        args: Vec<LogValue>,
    ) -> Result<LogMetadata, LogError> {
        self.log(LogLevel::Info, namespace, args)
    }

    pub fn warn(
        &mut self,
        namespace: Option<&str>,
        args: Vec<LogValue>,
    ) -> Result<LogMetadata, LogError> {
        self.log(LogLevel::Warn, namespace, args)
    }

    pub fn error(
        &mut self,
        namespace: Option<&str>,
        args: Vec<LogValue>,
    ) -> Result<LogMetadata, LogError> {
        self.log(LogLevel::Error, namespace, args)
    }

    pub fn fatal(
        &mut self,
        namespace: Option<&str>,
        args: Vec<LogValue>,
    ) -> Result<LogMetadata, LogError> {
        self.log(LogLevel::Fatal, namespace, args)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("config", &self.config)
            .field("log_file", &self.log_file())
            .finish_non_exhaustive()
    }
}
