//! File sink configured from an inline document
//!
//! Run with: cargo run --example file_logging

use timber::prelude::*;

fn main() -> Result<()> {
    println!("=== Timber - File Logging Example ===\n");

    let log_path = std::env::temp_dir().join("timber_demo.log");
    let json = serde_json::json!({
        "Filters": [{
            "Enabled": true,
            "Tag": "file",
            "Type": "file",
            "Level": "DEBUG",
            "Properties": [
                { "name": "filename", "value": log_path.display().to_string() },
                { "name": "format", "value": "%T %l %M" }
            ]
        }]
    })
    .to_string();

    let mut loggers = LoggerSet::new();
    ConfigLoader::new().load_str(&json, &mut loggers)?;

    println!("Writing to: {}", log_path.display());
    for i in 0..5 {
        loggers.write(&LogEntry::new(LogLevel::Debug, format!("Line {}", i)))?;
    }
    loggers.flush()?;

    let content = std::fs::read_to_string(&log_path)?;
    println!("\nFile contents:\n{}", content);

    println!("=== Example completed successfully! ===");

    Ok(())
}
