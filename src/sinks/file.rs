//! File sink implementation
//!
//! Every record is written through a full open → append → close cycle: no
//! handle survives between calls, so a crash between writes never leaves a
//! dangling descriptor and each line lands via an OS-level atomic append.

use crate::core::{format, LogRecord, PolicyTable, Result, Sink, SinkError};
use fs2::FileExt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Base directory the log file lives under.
#[derive(Debug, Clone)]
pub enum BaseDir {
    /// The OS temporary directory.
    Temp,
    /// An explicit directory.
    Custom(PathBuf),
}

impl BaseDir {
    fn path(&self) -> PathBuf {
        match self {
            BaseDir::Temp => std::env::temp_dir(),
            BaseDir::Custom(path) => path.clone(),
        }
    }
}

pub struct FileSink {
    directory: PathBuf,
    path: PathBuf,
    policies: PolicyTable,
}

impl FileSink {
    /// Sink appending to `<directory>/<name>`. Nothing is touched on disk
    /// until the first record arrives; directory and file are created then.
    pub fn new(directory: impl Into<PathBuf>, name: &str) -> Self {
        let directory = directory.into();
        let path = directory.join(name);
        Self {
            directory,
            path,
            policies: PolicyTable::default(),
        }
    }

    /// Sink rooted at one of the well-known base directories.
    pub fn in_base(base: BaseDir, name: &str) -> Self {
        Self::new(base.path(), name)
    }

    /// Sink appending to `<temp-dir>/<name>`.
    pub fn temp(name: &str) -> Self {
        Self::in_base(BaseDir::Temp, name)
    }

    /// Override the presentation policy for this sink.
    #[must_use]
    pub fn with_policies(mut self, policies: PolicyTable) -> Self {
        self.policies = policies;
        self
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn append_line(&self, line: &str) -> Result<()> {
        std::fs::create_dir_all(&self.directory).map_err(|e| {
            SinkError::io_operation("creating log directory", self.directory.display().to_string(), e)
        })?;

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                SinkError::io_operation("opening log file", self.path.display().to_string(), e)
            })?;

        // Exclusive lock for the duration of this single append; released
        // when the handle closes at the end of the call.
        file.lock_exclusive()
            .map_err(|_| SinkError::file_sink(self.path.display().to_string(), "failed to lock"))?;

        let mut file = file;
        let outcome = file
            .write_all(line.as_bytes())
            .and_then(|_| file.write_all(b"\n"))
            .map_err(|e| {
                SinkError::io_operation("appending log line", self.path.display().to_string(), e)
            });

        let _ = fs2::FileExt::unlock(&file);
        outcome
    }
}

impl Sink for FileSink {
    fn consume(&mut self, record: &LogRecord) -> Result<()> {
        let line = format::render(record, &self.policies);
        self.append_line(&line)
    }

    fn name(&self) -> &str {
        "file"
    }
}
