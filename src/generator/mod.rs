//! Synthetic event-log generation.
//!
//! This module turns an event vocabulary and a target row count into a
//! sorted list of (unit, event, timestamp) records:
//! - Unit allocation arithmetic
//! - Per-unit trace simulation (repeats and rework)
//! - Sorting into log order

pub mod config;
pub mod record;
pub mod trace;
pub mod units;

// Re-export main types and functions
pub use config::GeneratorConfig;
pub use record::{format_timestamp, parse_timestamp, EventRecord};
pub use trace::{generate_event_logs, generate_unit, sort_records, UnitEvent};
pub use units::{expected_rows, per_unit, unit_count, unit_id, unit_ids};
