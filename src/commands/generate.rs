//! Generate command implementation.
//!
//! The generate command:
//! 1. Validates arguments
//! 2. Seeds the random source
//! 3. Generates and sorts the event log
//! 4. Writes the CSV file

use super::models::GenerateArgs;
use crate::generator::{expected_rows, parse_timestamp, GeneratorConfig};
use crate::inspect::summarize;
use crate::output::write_event_logs;
use crate::utils::config::TIMESTAMP_FORMAT;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Instant;

/// Execute the generate command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Number of data rows written
///
/// # Errors
/// * Empty event vocabulary (before the output file is touched)
/// * File write errors
pub fn execute_generate(args: &GenerateArgs) -> Result<usize> {
    let start_time = Instant::now();

    validate_args(args)?;

    info!(
        "Generating event log: {} rows requested, {} event types",
        args.num_lines,
        args.event_types.len()
    );
    debug!("Event types: {:?}", args.event_types);

    let mut rng = match args.seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let mut config = GeneratorConfig::new()
        .with_event_types(args.event_types.iter().cloned())
        .with_num_lines(args.num_lines);

    if let Some(start) = args.start {
        info!("Using fixed start {}", start);
        config = config.with_start(start);
    }

    let records = config
        .generate(&mut rng)
        .context("Failed to generate event log")?;

    debug!(
        "Generated {} rows ({} expected)",
        records.len(),
        expected_rows(args.num_lines)
    );

    write_event_logs(&records, &args.output)
        .with_context(|| format!("Failed to write event log to {}", args.output.display()))?;

    println!("Generated file: {}", args.output.display());

    if args.print_summary {
        println!("{}", summarize(&records).summary());
    }

    let elapsed = start_time.elapsed();
    info!("Generation completed in {:.2}s", elapsed.as_secs_f64());

    Ok(records.len())
}

/// Validate generate arguments
///
/// **Public** - can be called before execute_generate for early validation
pub fn validate_args(args: &GenerateArgs) -> Result<()> {
    if args.event_types.is_empty() {
        anyhow::bail!("At least one event type is required");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    Ok(())
}

/// Parse a `--start` value in the log's timestamp format
///
/// **Public** - clap value parser for main.rs
pub fn parse_start(value: &str) -> Result<NaiveDateTime, String> {
    parse_timestamp(value)
        .ok_or_else(|| format!("expected a timestamp formatted as {}", TIMESTAMP_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_args_default() {
        assert!(validate_args(&GenerateArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_args_empty_event_types() {
        let args = GenerateArgs {
            event_types: Vec::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_empty_output() {
        let args = GenerateArgs {
            output: PathBuf::new(),
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_parse_start() {
        let start = parse_start("2025-01-02 10:15:30").unwrap();
        assert_eq!(start.to_string(), "2025-01-02 10:15:30");
        assert!(parse_start("2025-01-02").is_err());
    }

    #[test]
    fn test_empty_event_types_leave_no_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output = temp_dir.path().join("events.csv");
        let args = GenerateArgs {
            output: output.clone(),
            event_types: Vec::new(),
            ..Default::default()
        };

        assert!(execute_generate(&args).is_err());
        assert!(!output.exists());
    }
}
