//! Load loggers from a JSON config document
//!
//! Run with: cargo run --example load_config [path/to/timber.json]

use timber::prelude::*;

fn main() -> Result<()> {
    println!("=== Timber - Config Loading Example ===\n");

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| concat!(env!("CARGO_MANIFEST_DIR"), "/demos/timber.json").to_string());

    let mut loggers = LoggerSet::new();
    let report = load_json_config(&path, &mut loggers)?;

    println!("1. Loaded {}:", path);
    println!("   registered: {}", report.registered);
    println!("   skipped:    {:?}", report.skipped);

    println!("\n2. Configured loggers:");
    loggers.with_loggers(|loggers| {
        for logger in loggers {
            println!(
                "   {} sink, level {}, pattern {:?}, {} granular override(s)",
                logger.sink_name(),
                logger.level,
                logger.formatter.pattern(),
                logger.granulars.len()
            );
        }
    });

    println!("\n3. Writing through the configured loggers:");
    let entry = LogEntry::new(LogLevel::Info, "Configured from JSON")
        .with_location("demos/load_config.rs", 40, "load_config");
    loggers.write(&entry)?;
    loggers.write(&LogEntry::new(LogLevel::Debug, "Below threshold (hidden)"))?;
    loggers.flush()?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
