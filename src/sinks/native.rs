//! Host log facade sink implementation
//!
//! Forwards rendered lines to whatever logger the host process installed
//! behind the `log` facade (env_logger, syslog bridges, platform loggers),
//! mapping each level to the nearest native severity category.

use crate::core::{format, LogRecord, PolicyTable, Result, Sink};

pub struct NativeLogSink {
    target: String,
    policies: PolicyTable,
}

impl NativeLogSink {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            policies: PolicyTable::default(),
        }
    }

    /// Override the presentation policy for this sink.
    #[must_use]
    pub fn with_policies(mut self, policies: PolicyTable) -> Self {
        self.policies = policies;
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for NativeLogSink {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

impl Sink for NativeLogSink {
    fn consume(&mut self, record: &LogRecord) -> Result<()> {
        let line = format::render(record, &self.policies);
        log::log!(target: &self.target, record.level.to_native(), "{}", line);
        Ok(())
    }

    fn name(&self) -> &str {
        "native"
    }
}
