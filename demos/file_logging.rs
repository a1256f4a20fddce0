//! File sink example
//!
//! Demonstrates fan-out to a console sink and a file sink at once, with the
//! file created on first use and every line appended through an
//! open-append-close cycle.
//!
//! Run with: cargo run --example file_logging

use fanlog::prelude::*;
use fanlog::{error, info, warning};

fn main() {
    println!("=== Fanlog - File Logging Example ===\n");

    let log_dir = std::env::temp_dir().join("fanlog-demo");
    let file_sink = FileSink::new(&log_dir, "app.log");
    let log_path = file_sink.path().to_path_buf();

    let logger = Dispatcher::builder()
        .sink(ConsoleSink::with_colors(false))
        .sink(file_sink)
        .build();

    info!(logger, "application started");
    warning!(logger, "cache miss rate above {}%", 20);
    error!(logger, "upstream timed out");

    match std::fs::read_to_string(&log_path) {
        Ok(content) => {
            println!("\nContents of {}:", log_path.display());
            for line in content.lines() {
                println!("  {}", line);
            }
        }
        Err(e) => eprintln!("could not read {}: {}", log_path.display(), e),
    }

    println!("\n=== Example completed successfully! ===");
}
