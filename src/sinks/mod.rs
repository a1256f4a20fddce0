//! Sink implementations

pub mod channel;
pub mod memory;
pub mod native;

#[cfg(feature = "console")]
pub mod console;

#[cfg(feature = "file")]
pub mod file;

pub use channel::ChannelSink;
pub use memory::{MemoryHandle, MemorySink};
pub use native::NativeLogSink;

#[cfg(feature = "console")]
pub use console::ConsoleSink;

#[cfg(feature = "file")]
pub use file::{BaseDir, FileSink};

// Re-export the trait alongside its implementations
pub use crate::core::Sink;
