//! Per-level presentation policy
//!
//! A [`PolicyTable`] decides, per level, which metadata segments a rendered
//! line carries: prefix glyph, timestamp granularity, thread name, call-site
//! label, and file/line. Tables are built once and consulted per record.

use super::level::Level;
use serde::{Deserialize, Serialize};

/// Timestamp granularity for a rendered line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampStyle {
    /// No timestamp segment at all.
    None,
    /// Date and time down to whole seconds, with zone offset.
    Seconds,
    /// Date and time with milliseconds and zone offset.
    #[default]
    Millis,
}

impl TimestampStyle {
    /// strftime pattern for this granularity, `None` when suppressed.
    pub fn pattern(self) -> Option<&'static str> {
        match self {
            TimestampStyle::None => None,
            TimestampStyle::Seconds => Some("%Y/%m/%d %H:%M:%S %z"),
            TimestampStyle::Millis => Some("%Y/%m/%d %H:%M:%S%.3f %z"),
        }
    }
}

/// How the call-site label is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameDisplay {
    /// No call-site label.
    None,
    /// Bare function name.
    Short,
    /// Composed `Object:function` label.
    #[default]
    Detailed,
}

/// Presentation policy for a single level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelPolicy {
    /// Prefix glyph. May be empty for the lowest level.
    pub glyph: String,
    pub timestamp: TimestampStyle,
    pub show_thread: bool,
    pub name_display: NameDisplay,
    pub show_file_line: bool,
}

impl LevelPolicy {
    /// Full-diagnostics policy with the given glyph.
    pub fn diagnostic(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            timestamp: TimestampStyle::Millis,
            show_thread: true,
            name_display: NameDisplay::Detailed,
            show_file_line: true,
        }
    }

    /// Terse policy: glyph and message only.
    pub fn terse(glyph: impl Into<String>) -> Self {
        Self {
            glyph: glyph.into(),
            timestamp: TimestampStyle::None,
            show_thread: false,
            name_display: NameDisplay::None,
            show_file_line: false,
        }
    }
}

/// Total mapping from [`Level`] to [`LevelPolicy`].
///
/// The default table keeps Info terse (a user-facing status line) and gives
/// every other level the full diagnostic treatment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyTable {
    policies: [LevelPolicy; Level::ALL.len()],
}

impl Default for PolicyTable {
    fn default() -> Self {
        Self {
            policies: [
                LevelPolicy::diagnostic(""),
                LevelPolicy::diagnostic("🛠DEBUG"),
                LevelPolicy::terse("🔵INFO"),
                LevelPolicy::diagnostic("📋NOTICE"),
                LevelPolicy::diagnostic("⚠️WARN"),
                LevelPolicy::diagnostic("🚫ERROR"),
                LevelPolicy::diagnostic("🔥FATAL"),
            ],
        }
    }
}

impl PolicyTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(&self, level: Level) -> &LevelPolicy {
        &self.policies[level as usize]
    }

    /// Replace the policy for one level.
    #[must_use]
    pub fn with_policy(mut self, level: Level, policy: LevelPolicy) -> Self {
        self.policies[level as usize] = policy;
        self
    }

    /// Replace just the glyph for one level.
    #[must_use]
    pub fn with_glyph(mut self, level: Level, glyph: impl Into<String>) -> Self {
        self.policies[level as usize].glyph = glyph.into();
        self
    }
}
