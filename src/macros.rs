//! Logging macros with call-site capture
//!
//! The macros are the introspection layer: they capture the enclosing
//! function name, file, and line into a [`CallSite`](crate::CallSite) and
//! hand them to the dispatcher as plain values. Message arguments use
//! `format!` syntax; the optional leading `instance: expr` form derives an
//! instance label from the value's type name.
//!
//! # Examples
//!
//! ```
//! use fanlog::prelude::*;
//! use fanlog::{entered, info, warning};
//!
//! struct Session;
//!
//! let sink = MemorySink::new();
//! let logger = Dispatcher::new(vec![Box::new(sink)]);
//! let session = Session;
//!
//! entered!(logger);
//! info!(logger, "listening on port {}", 8080);
//! warning!(logger, instance: session, "retry {} of {}", 3, 5);
//! ```

/// Capture the enclosing function name, file, and line.
#[macro_export]
macro_rules! callsite {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(f);
        // Trim the trailing "::f", then keep the bare function segment.
        let name = &name[..name.len() - 3];
        let function = match name.rfind("::") {
            Some(idx) => &name[idx + 2..],
            None => name,
        };
        $crate::CallSite::new(function, ::std::file!(), ::std::line!())
    }};
}

/// Dispatch at an explicit level with automatic formatting.
///
/// ```
/// # use fanlog::prelude::*;
/// # let logger = Dispatcher::new(vec![]);
/// use fanlog::dispatch;
/// dispatch!(logger, Level::Notice, "cache warmed in {}ms", 12);
/// ```
#[macro_export]
macro_rules! dispatch {
    ($logger:expr, $level:expr, instance: $instance:expr, $($arg:tt)+) => {
        $logger.dispatch(
            $level,
            ::std::format!($($arg)+),
            ::std::option::Option::Some($crate::label_of(&$instance)),
            $crate::callsite!(),
        )
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.dispatch(
            $level,
            ::std::format!($($arg)+),
            ::std::option::Option::None,
            $crate::callsite!(),
        )
    };
}

/// Log at the lowest, general-purpose level.
#[macro_export]
macro_rules! log {
    ($logger:expr, instance: $instance:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Level::Log, instance: $instance, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Level::Log, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, instance: $instance:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Level::Debug, instance: $instance, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, instance: $instance:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Level::Info, instance: $instance, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, instance: $instance:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Level::Notice, instance: $instance, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Level::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, instance: $instance:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Level::Warning, instance: $instance, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, instance: $instance:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Level::Error, instance: $instance, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message. Hard-stops debug builds after dispatch.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, instance: $instance:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Level::Fatal, instance: $instance, $($arg)+)
    };
    ($logger:expr, $($arg:tt)+) => {
        $crate::dispatch!($logger, $crate::Level::Fatal, $($arg)+)
    };
}

/// Emit a function-entry marker.
#[macro_export]
macro_rules! entered {
    ($logger:expr, instance: $instance:expr) => {
        $logger.entered(
            ::std::option::Option::Some($crate::label_of(&$instance)),
            $crate::callsite!(),
        )
    };
    ($logger:expr) => {
        $logger.entered(::std::option::Option::None, $crate::callsite!())
    };
}

/// Emit a function-exit / teardown marker.
#[macro_export]
macro_rules! leaving {
    ($logger:expr, instance: $instance:expr) => {
        $logger.leaving(
            ::std::option::Option::Some($crate::label_of(&$instance)),
            $crate::callsite!(),
        )
    };
    ($logger:expr) => {
        $logger.leaving(::std::option::Option::None, $crate::callsite!())
    };
}

/// Decode JSON bytes and log the compact rendering.
#[macro_export]
macro_rules! log_json {
    ($logger:expr, instance: $instance:expr, $data:expr) => {
        $logger.json(
            $data,
            ::std::option::Option::Some($crate::label_of(&$instance)),
            $crate::callsite!(),
        )
    };
    ($logger:expr, $data:expr) => {
        $logger.json($data, ::std::option::Option::None, $crate::callsite!())
    };
}
