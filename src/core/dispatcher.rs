//! Dispatcher: the logging façade
//!
//! Holds an ordered sink list and a level allow-list behind a single mutex.
//! A log call filters, builds one immutable [`LogRecord`], and fans it out
//! to every sink in registration order while holding the lock, so output
//! from concurrent callers is never interleaved within a line and
//! reconfiguration is atomic with in-flight calls.
//!
//! The lock is blocking and has no timeout: a sink that blocks forever
//! stalls logging process-wide. That trade-off is deliberate — log traffic
//! is assumed low-frequency relative to application work.

use super::{
    error::Result,
    format,
    level::{Level, LevelFilter},
    metrics::DispatchMetrics,
    policy::PolicyTable,
    record::{CallSite, LogRecord},
    sink::Sink,
};
use parking_lot::Mutex;
use std::fmt;

struct DispatcherState {
    sinks: Vec<Box<dyn Sink>>,
    filter: LevelFilter,
}

pub struct Dispatcher {
    state: Mutex<DispatcherState>,
    metrics: DispatchMetrics,
}

impl Dispatcher {
    /// Dispatcher with every level enabled.
    #[must_use]
    pub fn new(sinks: Vec<Box<dyn Sink>>) -> Self {
        Self::with_filter(sinks, LevelFilter::All)
    }

    #[must_use]
    pub fn with_filter(sinks: Vec<Box<dyn Sink>>, filter: LevelFilter) -> Self {
        Self {
            state: Mutex::new(DispatcherState { sinks, filter }),
            metrics: DispatchMetrics::new(),
        }
    }

    /// Enablement predicate for the current allow-list.
    pub fn is_enabled(&self, level: Level) -> bool {
        self.state.lock().filter.is_enabled(level)
    }

    /// Replace the level allow-list.
    pub fn set_levels(&self, filter: impl Into<LevelFilter>) -> &Self {
        self.state.lock().filter = filter.into();
        self
    }

    /// Replace the sink list. Insertion order is fan-out order.
    pub fn set_sinks(&self, sinks: Vec<Box<dyn Sink>>) -> &Self {
        self.state.lock().sinks = sinks;
        self
    }

    /// Add a sink at the end of the fan-out order.
    pub fn append_sink(&self, sink: impl Sink + 'static) -> &Self {
        self.state.lock().sinks.push(Box::new(sink));
        self
    }

    pub fn sink_count(&self) -> usize {
        self.state.lock().sinks.len()
    }

    pub fn metrics(&self) -> &DispatchMetrics {
        &self.metrics
    }

    /// Filter, build one record, and fan out to every sink.
    ///
    /// Fire-and-forget: sink failures are contained here and never reach
    /// the caller. A disabled level returns before any record is built or
    /// any sink is touched.
    pub fn dispatch(
        &self,
        level: Level,
        message: impl fmt::Display,
        instance: Option<&str>,
        site: CallSite,
    ) {
        self.emit(level, message, instance, None, site);
    }

    fn emit(
        &self,
        level: Level,
        message: impl fmt::Display,
        instance: Option<&str>,
        prefix: Option<&str>,
        site: CallSite,
    ) {
        let mut state = self.state.lock();
        if !state.filter.is_enabled(level) {
            return;
        }

        let mut record = LogRecord::new(level, message, site);
        if let Some(label) = instance {
            record = record.with_instance_label(label);
        }
        if let Some(prefix) = prefix {
            record = record.with_prefix(prefix);
        }

        Self::fan_out(&mut state.sinks, &record, &self.metrics);
        drop(state);

        // The one level with a non-logging side effect: hard stop in debug
        // builds, once every sink has seen the record.
        if level == Level::Fatal {
            debug_assert!(false, "{}", format::render(&record, &PolicyTable::default()));
        }
    }

    /// Deliver one record to each sink with per-sink panic isolation, so a
    /// single failing sink cannot keep the others from seeing the record.
    fn fan_out(sinks: &mut [Box<dyn Sink>], record: &LogRecord, metrics: &DispatchMetrics) {
        let mut has_error = false;

        for (idx, sink) in sinks.iter_mut().enumerate() {
            let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                sink.consume(record)
            }));

            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] sink #{} failed: {}", idx, e);
                    has_error = true;
                }
                Err(panic_info) => {
                    let panic_msg = if let Some(s) = panic_info.downcast_ref::<&str>() {
                        s.to_string()
                    } else if let Some(s) = panic_info.downcast_ref::<String>() {
                        s.clone()
                    } else {
                        "unknown panic".to_string()
                    };
                    eprintln!(
                        "[LOGGER CRITICAL] sink #{} panicked: {}. \
                         Other sinks continue to function.",
                        idx, panic_msg
                    );
                    has_error = true;
                }
            }
        }

        if has_error {
            metrics.record_dropped();
        } else {
            metrics.record_delivered();
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.lock();
        for sink in state.sinks.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn log(&self, message: impl fmt::Display, instance: Option<&str>, site: CallSite) {
        self.dispatch(Level::Log, message, instance, site);
    }

    #[inline]
    pub fn debug(&self, message: impl fmt::Display, instance: Option<&str>, site: CallSite) {
        self.dispatch(Level::Debug, message, instance, site);
    }

    #[inline]
    pub fn info(&self, message: impl fmt::Display, instance: Option<&str>, site: CallSite) {
        self.dispatch(Level::Info, message, instance, site);
    }

    #[inline]
    pub fn notice(&self, message: impl fmt::Display, instance: Option<&str>, site: CallSite) {
        self.dispatch(Level::Notice, message, instance, site);
    }

    #[inline]
    pub fn warning(&self, message: impl fmt::Display, instance: Option<&str>, site: CallSite) {
        self.dispatch(Level::Warning, message, instance, site);
    }

    #[inline]
    pub fn error(&self, message: impl fmt::Display, instance: Option<&str>, site: CallSite) {
        self.dispatch(Level::Error, message, instance, site);
    }

    #[inline]
    pub fn fatal(&self, message: impl fmt::Display, instance: Option<&str>, site: CallSite) {
        self.dispatch(Level::Fatal, message, instance, site);
    }

    /// Function-entry marker. The message may be empty.
    pub fn entered(&self, instance: Option<&str>, site: CallSite) {
        self.emit(Level::Log, "", instance, Some("➡️ENTER"), site);
    }

    /// Function-exit / teardown marker.
    pub fn leaving(&self, instance: Option<&str>, site: CallSite) {
        self.emit(Level::Log, "", instance, Some("⬅️EXIT"), site);
    }

    /// Decode JSON bytes into a compact one-line string and log it.
    ///
    /// Undecodable input logs an empty message rather than failing.
    pub fn json(&self, data: &[u8], instance: Option<&str>, site: CallSite) {
        self.emit(Level::Log, decode_json(data), instance, Some("🌍JSON"), site);
    }
}

/// Compact re-rendering of arbitrary JSON bytes, empty string when invalid.
pub(crate) fn decode_json(data: &[u8]) -> String {
    serde_json::from_slice::<serde_json::Value>(data)
        .map(|value| value.to_string())
        .unwrap_or_default()
}

/// Builder for constructing a Dispatcher with a fluent API
///
/// # Example
/// ```
/// use fanlog::prelude::*;
///
/// let logger = Dispatcher::builder()
///     .sink(MemorySink::new())
///     .levels([Level::Info, Level::Error])
///     .build();
/// ```
pub struct DispatcherBuilder {
    sinks: Vec<Box<dyn Sink>>,
    filter: LevelFilter,
}

impl DispatcherBuilder {
    pub fn new() -> Self {
        Self {
            sinks: Vec::new(),
            filter: LevelFilter::All,
        }
    }

    /// Add a sink, in fan-out order.
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    /// Set the allow-list to exactly the given levels.
    #[must_use = "builder methods return a new value"]
    pub fn levels(mut self, levels: impl IntoIterator<Item = Level>) -> Self {
        self.filter = LevelFilter::only(levels);
        self
    }

    /// Set the full filter, including the all-levels sentinel.
    #[must_use = "builder methods return a new value"]
    pub fn filter(mut self, filter: LevelFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn build(self) -> Dispatcher {
        Dispatcher::with_filter(self.sinks, self.filter)
    }
}

impl Default for DispatcherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    #[must_use]
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }
}
