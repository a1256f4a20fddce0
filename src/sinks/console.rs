//! Console sink implementation

use crate::core::{format, Level, LogRecord, PolicyTable, Result, Sink};
use colored::Colorize;

pub struct ConsoleSink {
    use_colors: bool,
    policies: PolicyTable,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            policies: PolicyTable::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            policies: PolicyTable::default(),
        }
    }

    /// Override the presentation policy for this sink.
    #[must_use]
    pub fn with_policies(mut self, policies: PolicyTable) -> Self {
        self.policies = policies;
        self
    }

    fn render(&self, record: &LogRecord) -> String {
        let line = format::render(record, &self.policies);
        if self.use_colors {
            line.color(record.level.color_code()).to_string()
        } else {
            line
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn consume(&mut self, record: &LogRecord) -> Result<()> {
        let line = self.render(record);

        // Error and Fatal go to stderr, everything else to stdout.
        match record.level {
            Level::Error | Level::Fatal => eprintln!("{}", line),
            _ => println!("{}", line),
        }

        // Highest severity also hard-stops debug builds, after printing.
        if record.level == Level::Fatal {
            debug_assert!(false, "{}", format::render(record, &self.policies));
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both streams since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
