use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("File error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Per-logger configuration, fully populated at construction.
///
/// Defaults are literal values applied in one place (`Default`); there is no
/// late default-filling. The flags are independent: `enable` gates console
/// output only and `write` gates file output only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Console output on/off.
    pub enable: bool,
    /// Include the timestamp segment in the console line. The file line
    /// always carries a timestamp regardless of this flag.
    pub timestamp: bool,
    /// Default namespace used when a call site omits one.
    pub namespace: Option<String>,
    /// Optional file sink.
    pub write: Option<WriteConfig>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enable: true,
            timestamp: true,
            namespace: None,
            write: None,
        }
    }
}

impl LoggerConfig {
    /// Loads a configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    pub fn with_write(mut self, write: WriteConfig) -> Self {
        self.write = Some(write);
        self
    }
}

/// File-sink configuration: the log file is `dir/filename`, opened once in
/// append mode at logger construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriteConfig {
    #[serde(default = "default_true")]
    pub enable: bool,
    pub dir: PathBuf,
    pub filename: String,
}

impl WriteConfig {
    pub fn new(dir: impl Into<PathBuf>, filename: impl Into<String>) -> Self {
        Self {
            enable: true,
            dir: dir.into(),
            filename: filename.into(),
        }
    }
}

fn default_true() -> bool {
    true
}
