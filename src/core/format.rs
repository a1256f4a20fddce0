//! Record-to-line formatter
//!
//! Pure function over an immutable [`LogRecord`] and a [`PolicyTable`]:
//! rendering the same record twice yields byte-identical output.

use super::policy::{NameDisplay, PolicyTable, TimestampStyle};
use super::record::LogRecord;

/// Separator emitted between the message body and the call-site label.
pub const SEPARATOR: &str = " --";

/// Render one record as a single line.
///
/// Segment order is fixed: glyph, timestamp, thread, message, separator,
/// call-site label, file:line. Each segment is included only when the
/// level's policy asks for it. An empty message contributes neither the
/// body segment nor the separator, so no double space or dangling
/// separator can appear. Emptiness means length zero; the message is not
/// trimmed first.
pub fn render(record: &LogRecord, table: &PolicyTable) -> String {
    let policy = table.policy(record.level);
    let mut line = String::new();

    // A record-level prefix beats the level glyph.
    match &record.prefix {
        Some(prefix) => line.push_str(prefix),
        None => line.push_str(&policy.glyph),
    }

    if policy.timestamp != TimestampStyle::None {
        line.push_str(" [");
        line.push_str(&record.timestamp_string(policy.timestamp));
        line.push(']');
    }

    if policy.show_thread {
        line.push_str(" [");
        line.push_str(&record.thread_label());
        line.push(']');
    }

    let has_message = !record.message.is_empty();
    if has_message {
        line.push(' ');
        line.push_str(&record.message);
    }

    if policy.name_display != NameDisplay::None {
        if has_message {
            line.push_str(SEPARATOR);
        }
        line.push(' ');
        match policy.name_display {
            NameDisplay::Short => line.push_str(record.short_name()),
            _ => line.push_str(&record.object_name()),
        }
    }

    if policy.show_file_line {
        line.push(' ');
        line.push_str(record.file_name());
        line.push(':');
        line.push_str(&record.line.to_string());
    }

    line
}
