//! Broadcast channel sink implementation
//!
//! Publishes every rendered line to all subscribed receivers, so display
//! widgets or collectors can observe the stream without touching the
//! dispatcher. Delivery is best-effort: a hung-up subscriber is pruned on
//! the next publish.

use crate::core::{format, LogRecord, PolicyTable, Result, Sink};
use crossbeam_channel::{unbounded, Receiver, Sender};

pub struct ChannelSink {
    subscribers: Vec<Sender<String>>,
    policies: PolicyTable,
}

impl ChannelSink {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
            policies: PolicyTable::default(),
        }
    }

    /// Override the presentation policy for this sink.
    #[must_use]
    pub fn with_policies(mut self, policies: PolicyTable) -> Self {
        self.policies = policies;
        self
    }

    /// Register a new subscriber. Call before handing the sink to a
    /// dispatcher; the receiver keeps working afterwards.
    pub fn subscribe(&mut self) -> Receiver<String> {
        let (sender, receiver) = unbounded();
        self.subscribers.push(sender);
        receiver
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl Default for ChannelSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ChannelSink {
    fn consume(&mut self, record: &LogRecord) -> Result<()> {
        let line = format::render(record, &self.policies);
        self.subscribers
            .retain(|subscriber| subscriber.send(line.clone()).is_ok());
        Ok(())
    }

    fn name(&self) -> &str {
        "channel"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CallSite, Level};

    fn record(message: &str) -> LogRecord {
        LogRecord::new(Level::Info, message, CallSite::new("run", "src/a.rs", 1))
    }

    #[test]
    fn test_all_subscribers_receive_each_line() {
        let mut sink = ChannelSink::new();
        let first = sink.subscribe();
        let second = sink.subscribe();

        sink.consume(&record("broadcast")).expect("consume");

        assert!(first.try_recv().expect("first").contains("broadcast"));
        assert!(second.try_recv().expect("second").contains("broadcast"));
    }

    #[test]
    fn test_hung_up_subscriber_is_pruned() {
        let mut sink = ChannelSink::new();
        let keeper = sink.subscribe();
        drop(sink.subscribe());
        assert_eq!(sink.subscriber_count(), 2);

        sink.consume(&record("still flowing")).expect("consume");

        assert_eq!(sink.subscriber_count(), 1);
        assert!(keeper.try_recv().is_ok());
    }
}
