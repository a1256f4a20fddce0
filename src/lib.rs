//! # Fanlog
//!
//! A small, configurable logging façade: leveled calls are enriched with
//! call-site metadata, formatted into human-readable lines, and fanned out
//! to pluggable sinks.
//!
//! ## Features
//!
//! - **Leveled Façade**: one call per level, with an enablement allow-list
//! - **Multiple Sinks**: console, file, host log facade, broadcast channel,
//!   in-memory buffer, and custom sinks
//! - **Thread Safe**: one lock serializes fan-out, so concurrent callers
//!   never interleave within a line
//! - **Call-Site Capture**: macros record function, file, and line for free
//!
//! ## Quick start
//!
//! ```
//! use fanlog::prelude::*;
//! use fanlog::info;
//!
//! let logger = Dispatcher::builder()
//!     .sink(MemorySink::new())
//!     .build();
//!
//! info!(logger, "server listening on port {}", 8080);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        label_of, CallSite, DispatchMetrics, Dispatcher, DispatcherBuilder, Level, LevelFilter,
        LevelPolicy, LogRecord, NameDisplay, PolicyTable, Result, Sink, SinkError, TimestampStyle,
    };
    pub use crate::sinks::{ChannelSink, MemoryHandle, MemorySink, NativeLogSink};

    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;

    #[cfg(feature = "file")]
    pub use crate::sinks::{BaseDir, FileSink};
}

pub use crate::core::{
    label_of, registry, CallSite, DispatchMetrics, Dispatcher, DispatcherBuilder, Level,
    LevelFilter, LevelPolicy, LogRecord, NameDisplay, PolicyTable, Result, Sink, SinkError,
    TimestampStyle,
};
pub use crate::sinks::{ChannelSink, MemoryHandle, MemorySink, NativeLogSink};

#[cfg(feature = "console")]
pub use crate::sinks::ConsoleSink;

#[cfg(feature = "file")]
pub use crate::sinks::{BaseDir, FileSink};
