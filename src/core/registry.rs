//! Optional process-wide dispatcher registry
//!
//! Explicit dependency passing is the primary wiring style; this registry
//! exists for applications that want one shared dispatcher installed once
//! at startup instead of threading it through every constructor.

use super::dispatcher::Dispatcher;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Dispatcher> = OnceLock::new();

/// Install the process-wide dispatcher. Returns `false` if one was already
/// installed; the registry is write-once.
pub fn init(dispatcher: Dispatcher) -> bool {
    GLOBAL.set(dispatcher).is_ok()
}

/// The installed dispatcher, if any.
pub fn try_global() -> Option<&'static Dispatcher> {
    GLOBAL.get()
}
