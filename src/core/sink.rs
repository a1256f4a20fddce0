//! Sink trait for log output destinations
//!
//! Each sink owns its formatting: it holds a [`PolicyTable`](crate::core::policy::PolicyTable)
//! (the shared default unless overridden) and renders records itself, since
//! different destinations legitimately want different presentation. A record
//! carrying an explicit prefix override always beats the sink's level glyph.

use super::{error::Result, record::LogRecord};

pub trait Sink: Send + Sync {
    /// Consume one record. Failures are reported, never propagated to the
    /// logging caller; a sink that cannot handle a record degrades to a
    /// best-effort fallback instead of panicking.
    fn consume(&mut self, record: &LogRecord) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str;
}
