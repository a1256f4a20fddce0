//! Basic façade usage example
//!
//! Demonstrates leveled logging through a console sink, level filtering,
//! and the instance-labeled macro form.
//!
//! Run with: cargo run --example basic_usage

use fanlog::prelude::*;
use fanlog::{debug, entered, error, info, leaving, log_json, notice, warning};

struct Session {
    user: &'static str,
}

fn main() {
    println!("=== Fanlog - Basic Usage Example ===\n");

    // One console sink, every level enabled
    let logger = Dispatcher::builder().sink(ConsoleSink::new()).build();

    println!("1. Logging at different levels:");
    debug!(logger, "connecting to backend");
    info!(logger, "connected");
    notice!(logger, "certificate expires in 20 days");
    warning!(logger, "slow response: {}ms", 870);
    error!(logger, "request failed after {} retries", 3);

    println!("\n2. Instance-labeled calls and markers:");
    let session = Session { user: "ada" };
    entered!(logger, instance: session);
    info!(logger, instance: session, "session opened for {}", session.user);
    log_json!(logger, br#"{ "user": "ada", "roles": ["admin"] }"#);
    leaving!(logger, instance: session);

    println!("\n3. Narrowing the allow-list to warnings and up:");
    logger.set_levels(LevelFilter::only([Level::Warning, Level::Error, Level::Fatal]));
    debug!(logger, "hidden now");
    info!(logger, "also hidden");
    warning!(logger, "still visible");

    println!("\n=== Example completed successfully! ===");
}
