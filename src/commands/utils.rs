use crate::inspect::{unknown_events, validate_event_log};
use crate::output::read_event_logs;
use crate::utils::config::{CSV_HEADER, DEFAULT_EVENT_TYPES, TIMESTAMP_FORMAT};
use anyhow::{Context, Result};
use std::path::Path;

/// Validate an event log CSV file
pub fn validate_log_file(file_path: &Path, event_types: &[String]) -> Result<()> {
    println!("Validating event log: {}", file_path.display());

    let records = read_event_logs(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;
    let summary = validate_event_log(&records)?;

    println!("✓ Valid event log");
    println!("  Rows: {}", summary.rows);
    println!("  Units: {}", summary.units);
    println!("  Distinct Events: {}", summary.distinct_events);
    println!("  {}", summary.summary());

    let vocabulary: Vec<&str> = if event_types.is_empty() {
        DEFAULT_EVENT_TYPES.to_vec()
    } else {
        event_types.iter().map(String::as_str).collect()
    };

    let unknown = unknown_events(&records, vocabulary.as_slice());
    if !unknown.is_empty() {
        println!("  Events outside vocabulary: {}", unknown.join(", "));
    }

    Ok(())
}

/// Display the output layout
pub fn display_format() {
    println!("Event Log Format");
    println!("  Header: {}", CSV_HEADER.join(","));
    println!("  unitName: string        - Unit_<positive integer>");
    println!("  eventName: string       - One of the configured event types");
    println!("  eventStartDate: string  - {} (24-hour, zero-padded)", TIMESTAMP_FORMAT);
    println!("  Rows sorted by unitName, then eventStartDate");
}

/// Display version information
pub fn display_version() {
    println!("Event Log Synth v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Synthetic process event logs for process-mining and workflow tools.");
}
