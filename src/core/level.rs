//! Log level definitions and the enablement filter

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[derive(Default)]
pub enum Level {
    /// Lowest severity, general-purpose output. Doubles as the trace slot.
    Log = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Notice = 3,
    Warning = 4,
    Error = 5,
    Fatal = 6,
}

impl Level {
    /// Every level, in increasing severity. Useful for building filters.
    pub const ALL: [Level; 7] = [
        Level::Log,
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warning,
        Level::Error,
        Level::Fatal,
    ];

    pub fn to_str(&self) -> &'static str {
        match self {
            Level::Log => "LOG",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warning => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// Nearest severity category of the host `log` facade.
    pub fn to_native(self) -> log::Level {
        match self {
            Level::Log => log::Level::Trace,
            Level::Debug => log::Level::Debug,
            Level::Info | Level::Notice => log::Level::Info,
            Level::Warning => log::Level::Warn,
            Level::Error | Level::Fatal => log::Level::Error,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            Level::Log => BrightBlack,
            Level::Debug => Blue,
            Level::Info => Green,
            Level::Notice => Cyan,
            Level::Warning => Yellow,
            Level::Error => Red,
            Level::Fatal => BrightRed,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "LOG" | "TRACE" => Ok(Level::Log),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "NOTICE" => Ok(Level::Notice),
            "WARN" | "WARNING" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "FATAL" => Ok(Level::Fatal),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

/// Allow-list of enabled levels.
///
/// `All` and `Only(empty)` are distinct configuration states: the former
/// enables every level, the latter disables every level. Callers that want
/// "log nothing" must say so with an explicit empty allow-list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelFilter {
    #[default]
    All,
    Only(HashSet<Level>),
}

impl LevelFilter {
    /// Filter that disables every level.
    pub fn none() -> Self {
        LevelFilter::Only(HashSet::new())
    }

    /// Filter that enables exactly the given levels.
    pub fn only(levels: impl IntoIterator<Item = Level>) -> Self {
        LevelFilter::Only(levels.into_iter().collect())
    }

    /// Pure enablement predicate.
    pub fn is_enabled(&self, level: Level) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Only(levels) => levels.contains(&level),
        }
    }
}

impl FromIterator<Level> for LevelFilter {
    fn from_iter<I: IntoIterator<Item = Level>>(iter: I) -> Self {
        LevelFilter::Only(iter.into_iter().collect())
    }
}

impl From<&[Level]> for LevelFilter {
    fn from(levels: &[Level]) -> Self {
        LevelFilter::Only(levels.iter().copied().collect())
    }
}
