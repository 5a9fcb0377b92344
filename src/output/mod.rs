//! Output writers for event logs and process graphs.
//!
//! This module handles reading and writing data on disk:
//! - CSV event logs
//! - JSON process graphs

mod fs;
pub mod csv_log;
pub mod graph_json;

// Re-export main functions
pub use csv_log::{read_event_logs, read_event_logs_from, write_event_logs, write_event_logs_to};
pub use graph_json::{read_graph, write_graph};
