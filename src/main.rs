//! Event Log Synth CLI
//!
//! Generates synthetic process event logs and derives process graphs from them.

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use event_log_synth::commands::{
    display_format, display_version, execute_generate, execute_graph, parse_start,
    validate_log_file, GenerateArgs, GraphArgs,
};
use event_log_synth::utils::config::{
    DEFAULT_EVENT_TYPES, DEFAULT_NUM_LINES, DEFAULT_OUTPUT_FILE, ENV_NUM_LINES, ENV_OUTPUT,
    ENV_SEED,
};

/// Event Log Synth - synthetic process event logs
#[derive(Parser, Debug)]
#[command(name = "event-log-synth")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a synthetic event log
    Generate {
        /// Output path for the CSV event log
        #[arg(short, long, env = ENV_OUTPUT, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,

        /// Target number of rows (actual count is rounded down per unit)
        #[arg(short, long, env = ENV_NUM_LINES, default_value_t = DEFAULT_NUM_LINES)]
        num_lines: usize,

        /// Event label (repeat to replace the default vocabulary)
        #[arg(short, long = "event-type")]
        event_types: Vec<String>,

        /// Seed for reproducible units and events (timestamps also need --start)
        #[arg(long, env = ENV_SEED)]
        seed: Option<u64>,

        /// Reference "now" as "YYYY-MM-DD HH:MM:SS" (defaults to the local clock)
        #[arg(long, value_parser = parse_start)]
        start: Option<NaiveDateTime>,

        /// Print a summary of the generated log
        #[arg(long)]
        summary: bool,
    },

    /// Build a directly-follows process graph from an event log
    Graph {
        /// CSV event log to read
        #[arg(short, long)]
        input: PathBuf,

        /// Output path for the JSON graph
        #[arg(short, long, default_value = "process_graph.json")]
        output: PathBuf,
    },

    /// Validate an event log CSV file
    Validate {
        /// Path to event log CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// Expected event label (repeat; defaults to the built-in vocabulary)
        #[arg(short, long = "event-type")]
        event_types: Vec<String>,
    },

    /// Display the event log format
    Format,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Generate {
            output,
            num_lines,
            event_types,
            seed,
            start,
            summary,
        } => {
            let event_types = if event_types.is_empty() {
                DEFAULT_EVENT_TYPES.iter().map(|s| s.to_string()).collect()
            } else {
                event_types
            };

            let args = GenerateArgs {
                output,
                num_lines,
                event_types,
                seed,
                start,
                print_summary: summary,
            };

            execute_generate(&args)?;
        }

        Commands::Graph { input, output } => {
            execute_graph(&GraphArgs { input, output })?;
        }

        Commands::Validate { file, event_types } => {
            validate_log_file(&file, &event_types)?;
        }

        Commands::Format => {
            display_format();
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
