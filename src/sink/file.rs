use super::LogSink;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// File sink appending plain-text lines to a single log file.
///
/// The file is resolved as `dir/filename`, opened once in append mode
/// (created if missing), and held for the sink's lifetime. Each line is
/// written with a single `write_all` call so append-mode semantics keep
/// individual lines contiguous.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
}

impl FileSink {
    pub fn open(dir: &Path, filename: &str) -> io::Result<Self> {
        let path = dir.join(filename);
        let file = OpenOptions::new().append(true).create(true).open(&path)?;

        Ok(Self { path, file })
    }

    /// Resolved path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogSink for FileSink {
    fn append(&mut self, line: &str) -> io::Result<()> {
        let mut buf = String::with_capacity(line.len() + 1);
        buf.push_str(line);
        buf.push('\n');
        self.file.write_all(buf.as_bytes())
    }
}
