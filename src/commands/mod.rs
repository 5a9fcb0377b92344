//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod generate;
pub mod graph;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use generate::{execute_generate, parse_start, validate_args};
pub use graph::execute_graph;
pub use models::{GenerateArgs, GraphArgs};
pub use utils::{display_format, display_version, validate_log_file};
