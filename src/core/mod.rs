//! Core dispatcher types and traits

pub mod dispatcher;
pub mod error;
pub mod format;
pub mod level;
pub mod metrics;
pub mod policy;
pub mod record;
pub mod registry;
pub mod sink;

pub use dispatcher::{Dispatcher, DispatcherBuilder};
pub use error::{Result, SinkError};
pub use level::{Level, LevelFilter};
pub use metrics::DispatchMetrics;
pub use policy::{LevelPolicy, NameDisplay, PolicyTable, TimestampStyle};
pub use record::{label_of, CallSite, LogRecord};
pub use sink::Sink;
