//! In-memory sink implementation
//!
//! Buffers rendered lines behind a shared handle. The read side is what
//! display widgets and tests observe.

use crate::core::{format, LogRecord, PolicyTable, Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Read handle onto a [`MemorySink`]'s buffer.
#[derive(Debug, Clone)]
pub struct MemoryHandle {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemoryHandle {
    /// Snapshot of every line captured so far, in arrival order.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lines.lock().clear();
    }
}

pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
    policies: PolicyTable,
}

impl MemorySink {
    pub fn new() -> Self {
        Self {
            lines: Arc::new(Mutex::new(Vec::new())),
            policies: PolicyTable::default(),
        }
    }

    /// Override the presentation policy for this sink.
    #[must_use]
    pub fn with_policies(mut self, policies: PolicyTable) -> Self {
        self.policies = policies;
        self
    }

    /// Handle that keeps reading after the sink moves into a dispatcher.
    pub fn handle(&self) -> MemoryHandle {
        MemoryHandle {
            lines: Arc::clone(&self.lines),
        }
    }
}

impl Default for MemorySink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for MemorySink {
    fn consume(&mut self, record: &LogRecord) -> Result<()> {
        let line = format::render(record, &self.policies);
        self.lines.lock().push(line);
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}
