//! Event records emitted by the generator.

use crate::utils::config::TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use std::cmp::Ordering;

/// A single row of the event log
///
/// **Public** - produced by the generator, consumed by writers and the graph builder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Unit identifier ("Unit_<k>")
    pub unit: String,

    /// Event label, one of the configured event types
    pub event: String,

    /// Simulated start time, whole seconds
    pub timestamp: NaiveDateTime,
}

impl EventRecord {
    pub fn new(unit: impl Into<String>, event: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        Self {
            unit: unit.into(),
            event: event.into(),
            timestamp,
        }
    }

    /// Timestamp rendered as `YYYY-MM-DD HH:MM:SS`
    pub fn formatted_timestamp(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// Ordering used for the written log: unit string, then timestamp
    ///
    /// Comparing the `NaiveDateTime` directly gives the same result as
    /// comparing the fixed-width formatted strings, since timestamps carry
    /// no sub-second part.
    pub fn log_order(&self, other: &Self) -> Ordering {
        self.unit
            .cmp(&other.unit)
            .then_with(|| self.timestamp.cmp(&other.timestamp))
    }
}

/// Format a timestamp with the fixed log format
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a timestamp written with the fixed log format
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).ok()
}
