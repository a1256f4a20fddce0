//! Log record structure

use super::level::Level;
use super::policy::TimestampStyle;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::path::Path;

// Thread-local cache for the thread label to avoid repeated allocations
thread_local! {
    static THREAD_LABEL_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
}

/// Get the cached label of the current thread, computing it on first access.
///
/// The main thread reports the literal `"main"` (it is named by the runtime);
/// other threads report their name when one is set and non-empty, and fall
/// back to a generic description of their thread id.
fn current_thread_label() -> String {
    THREAD_LABEL_CACHE.with(|cache| {
        let mut cache = cache.borrow_mut();
        if cache.is_none() {
            let thread = std::thread::current();
            let label = match thread.name() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => format!("{:?}", thread.id()),
            };
            *cache = Some(label);
        }
        cache.as_ref().expect("thread label cached in previous line").clone()
    })
}

/// Call-site metadata captured by the [`callsite!`](crate::callsite) macro.
///
/// The function, file and line are opaque to the rest of the crate: they are
/// carried into the record as plain strings and never re-derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    pub function: &'static str,
    pub file: &'static str,
    pub line: u32,
}

impl CallSite {
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self { function, file, line }
    }
}

/// Derive an instance label from a value's type name.
///
/// Strips the module path so `my_app::session::Session` labels as `Session`.
pub fn label_of<T: ?Sized>(_value: &T) -> &'static str {
    let name = std::any::type_name::<T>();
    name.rsplit("::").next().unwrap_or(name)
}

/// One immutable captured log event.
///
/// The timestamp is fixed at construction and never recomputed; everything
/// else a formatter needs (thread label, bare file name, composed call-site
/// label) is derived on demand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogRecord {
    pub level: Level,
    pub message: String,
    /// Caller-supplied glyph that takes precedence over the level glyph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Hint for the call-site label; absent means fall back to the file stem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_label: Option<String>,
    pub function: String,
    pub file: String,
    pub line: u32,
    pub timestamp: DateTime<Local>,
}

impl LogRecord {
    /// Sanitize the message to prevent log injection attacks.
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a crafted message cannot fake additional log lines.
    fn sanitize_message(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    /// Build a record from any displayable message.
    ///
    /// A `String`/`&str` message passes through as-is; any other type is
    /// rendered through its `Display` implementation.
    pub fn new(level: Level, message: impl fmt::Display, site: CallSite) -> Self {
        Self {
            level,
            message: Self::sanitize_message(&message.to_string()),
            prefix: None,
            instance_label: None,
            function: site.function.to_string(),
            file: site.file.to_string(),
            line: site.line,
            timestamp: Local::now(),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_instance_label(mut self, label: impl Into<String>) -> Self {
        self.instance_label = Some(label.into());
        self
    }

    /// Render the construction-time timestamp at the given granularity.
    pub fn timestamp_string(&self, style: TimestampStyle) -> String {
        match style.pattern() {
            Some(pattern) => self.timestamp.format(pattern).to_string(),
            None => String::new(),
        }
    }

    /// Label of the thread this record was captured on.
    pub fn thread_label(&self) -> String {
        current_thread_label()
    }

    /// Bare file name, path stripped.
    pub fn file_name(&self) -> &str {
        Path::new(&self.file)
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(&self.file)
    }

    /// File name without its extension, used as the call-site label fallback.
    fn file_stem(&self) -> &str {
        Path::new(&self.file)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(&self.file)
    }

    /// Composed `Object:function` call-site label.
    ///
    /// Uses the instance label when one was supplied and is non-empty,
    /// otherwise a synthetic name derived from the file stem.
    pub fn object_name(&self) -> String {
        match &self.instance_label {
            Some(label) if !label.is_empty() => format!("{}:{}", label, self.function),
            _ => format!("{}:{}", self.file_stem(), self.function),
        }
    }

    /// Bare function name.
    pub fn short_name(&self) -> &str {
        &self.function
    }
}
