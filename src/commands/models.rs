use crate::utils::config::{DEFAULT_EVENT_TYPES, DEFAULT_NUM_LINES, DEFAULT_OUTPUT_FILE};
use chrono::NaiveDateTime;
use std::path::PathBuf;

/// Arguments for the generate command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct GenerateArgs {
    /// Output path for the CSV event log
    pub output: PathBuf,

    /// Target row count
    pub num_lines: usize,

    /// Vocabulary of event labels
    pub event_types: Vec<String>,

    /// Seed for reproducible output (None = entropy-seeded)
    pub seed: Option<u64>,

    /// Reference "now" for unit clocks (None = local wall clock)
    pub start: Option<NaiveDateTime>,

    /// Print a log summary to stdout after writing
    pub print_summary: bool,
}

impl Default for GenerateArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            num_lines: DEFAULT_NUM_LINES,
            event_types: DEFAULT_EVENT_TYPES.iter().map(|s| s.to_string()).collect(),
            seed: None,
            start: None,
            print_summary: false,
        }
    }
}

/// Arguments for the graph command
#[derive(Debug, Clone)]
pub struct GraphArgs {
    /// CSV event log to read
    pub input: PathBuf,

    /// Output path for the JSON graph
    pub output: PathBuf,
}

impl Default for GraphArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_OUTPUT_FILE),
            output: PathBuf::from("process_graph.json"),
        }
    }
}
