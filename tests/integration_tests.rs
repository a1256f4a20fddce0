//! Integration tests for the logging façade
//!
//! These tests verify:
//! - Enablement filtering and the all-vs-empty sentinel distinction
//! - Fan-out order and exactly-once delivery per sink
//! - Formatting rules observable through real sinks
//! - Log injection prevention
//! - File sink persistence
//! - Fatal-level hard stop ordering

use fanlog::prelude::*;
use fanlog::{callsite, debug, error, info};
use parking_lot::Mutex;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// Sink that records which tag consumed each message, for ordering checks.
struct TaggedSink {
    tag: &'static str,
    journal: Arc<Mutex<Vec<(&'static str, String)>>>,
}

impl Sink for TaggedSink {
    fn consume(&mut self, record: &LogRecord) -> Result<()> {
        self.journal.lock().push((self.tag, record.message.clone()));
        Ok(())
    }

    fn name(&self) -> &str {
        self.tag
    }
}

#[test]
fn test_disabled_levels_produce_zero_sink_invocations() {
    let sink = MemorySink::new();
    let handle = sink.handle();
    let logger = Dispatcher::builder()
        .sink(sink)
        .levels([Level::Warning, Level::Error])
        .build();

    info!(logger, "suppressed");
    debug!(logger, "also suppressed");

    assert!(handle.is_empty());
    assert_eq!(logger.metrics().delivered_count(), 0);

    error!(logger, "delivered");
    assert_eq!(handle.len(), 1);
}

#[test]
fn test_all_sentinel_and_empty_set_are_observably_different() {
    let everything = MemorySink::new();
    let everything_handle = everything.handle();
    let permissive = Dispatcher::with_filter(vec![Box::new(everything)], LevelFilter::All);

    let nothing = MemorySink::new();
    let nothing_handle = nothing.handle();
    let muted = Dispatcher::with_filter(vec![Box::new(nothing)], LevelFilter::none());

    for level in Level::ALL {
        permissive.dispatch(level, "ping", None, callsite!());
        muted.dispatch(level, "ping", None, callsite!());
    }

    assert_eq!(everything_handle.len(), Level::ALL.len());
    assert!(nothing_handle.is_empty());
}

#[test]
fn test_fan_out_hits_every_sink_once_in_registration_order() {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let logger = Dispatcher::new(vec![
        Box::new(TaggedSink { tag: "first", journal: Arc::clone(&journal) }),
        Box::new(TaggedSink { tag: "second", journal: Arc::clone(&journal) }),
        Box::new(TaggedSink { tag: "third", journal: Arc::clone(&journal) }),
    ]);

    info!(logger, "fan out");

    let entries = journal.lock();
    let tags: Vec<&str> = entries.iter().map(|(tag, _)| *tag).collect();
    assert_eq!(tags, vec!["first", "second", "third"]);
}

#[test]
fn test_appended_sink_joins_the_fan_out_tail() {
    let journal = Arc::new(Mutex::new(Vec::new()));
    let logger = Dispatcher::new(vec![Box::new(TaggedSink {
        tag: "first",
        journal: Arc::clone(&journal),
    })]);
    logger.append_sink(TaggedSink { tag: "late", journal: Arc::clone(&journal) });

    info!(logger, "both");

    let entries = journal.lock();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].0, "late");
}

#[test]
fn test_empty_message_has_no_separator_or_double_space() {
    let sink = MemorySink::new();
    let handle = sink.handle();
    let logger = Dispatcher::new(vec![Box::new(sink)]);

    logger.error("", None, callsite!());

    let line = &handle.lines()[0];
    assert!(!line.contains(" --"), "dangling separator in {:?}", line);
    assert!(!line.contains("  "), "double space in {:?}", line);
}

#[test]
fn test_call_site_label_fallback_and_override() {
    let sink = MemorySink::new();
    let handle = sink.handle();
    let logger = Dispatcher::new(vec![Box::new(sink)]);

    let site = CallSite::new("render", "Sources/Views/Widget.swift", 10);
    logger.error("redraw failed", None, site);
    logger.error("redraw failed", Some("MyClass"), site);

    let lines = handle.lines();
    assert!(lines[0].contains("Widget:render"));
    assert!(lines[0].ends_with("Widget.swift:10"));
    assert!(lines[1].contains("MyClass:render"));
}

#[test]
fn test_log_injection_is_escaped() {
    let sink = MemorySink::new();
    let handle = sink.handle();
    let logger = Dispatcher::new(vec![Box::new(sink)]);

    let malicious = "User login\n🚫ERROR fake entry\nINFO continuation";
    info!(logger, "{}", malicious);

    let lines = handle.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("\\n"));
    assert!(!lines[0].contains('\n'));
}

#[test]
fn test_reconfiguring_levels_at_runtime() {
    let sink = MemorySink::new();
    let handle = sink.handle();
    let logger = Dispatcher::new(vec![Box::new(sink)]);

    debug!(logger, "one");
    logger.set_levels(LevelFilter::only([Level::Info]));
    debug!(logger, "two");
    info!(logger, "three");

    let lines = handle.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("one"));
    assert!(lines[1].contains("three"));
}

#[test]
fn test_file_sink_appends_through_dispatcher() {
    let temp = TempDir::new().expect("temp dir");
    let logger = Dispatcher::new(vec![Box::new(FileSink::new(temp.path(), "app.log"))]);

    info!(logger, "first run");
    info!(logger, "second run");

    let content = fs::read_to_string(temp.path().join("app.log")).expect("read log");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("first run"));
    assert!(lines[1].contains("second run"));
}

#[test]
fn test_channel_sink_streams_through_dispatcher() {
    let mut sink = ChannelSink::new();
    let receiver = sink.subscribe();
    let logger = Dispatcher::new(vec![Box::new(sink)]);

    info!(logger, "published");

    let line = receiver.try_recv().expect("line published");
    assert!(line.contains("published"));
}

#[test]
fn test_fatal_reaches_sinks_before_the_hard_stop() {
    let sink = MemorySink::new();
    let handle = sink.handle();
    let logger = Dispatcher::new(vec![Box::new(sink)]);

    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.fatal("disk full", None, callsite!());
    }));

    // The sink saw the record regardless of build flavor.
    let lines = handle.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("disk full"));
    assert!(lines[0].contains("FATAL"));

    // Debug builds hard-stop after fan-out; release builds return normally.
    if cfg!(debug_assertions) {
        assert!(outcome.is_err());
    } else {
        assert!(outcome.is_ok());
    }
}

#[test]
fn test_info_lines_stay_terse() {
    let sink = MemorySink::new();
    let handle = sink.handle();
    let logger = Dispatcher::new(vec![Box::new(sink)]);

    info!(logger, "user signed in");

    assert_eq!(handle.lines()[0], "🔵INFO user signed in");
}

#[test]
fn test_custom_policy_table_per_sink() {
    let policies = PolicyTable::default().with_policy(
        Level::Info,
        LevelPolicy {
            glyph: "INFO".to_string(),
            timestamp: TimestampStyle::None,
            show_thread: false,
            name_display: NameDisplay::Short,
            show_file_line: true,
        },
    );
    let sink = MemorySink::new().with_policies(policies);
    let handle = sink.handle();
    let logger = Dispatcher::new(vec![Box::new(sink)]);

    let site = CallSite::new("boot", "src/app.rs", 5);
    logger.info("ready", None, site);

    assert_eq!(handle.lines()[0], "INFO ready -- boot app.rs:5");
}
