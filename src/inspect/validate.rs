//! Structural checks and summary statistics for an event log.

use crate::generator::{format_timestamp, EventRecord};
use crate::utils::error::LogError;
use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Summary of a validated event log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSummary {
    /// Data rows (header excluded)
    pub rows: usize,

    /// Distinct unit identifiers
    pub units: usize,

    /// Distinct event names
    pub distinct_events: usize,

    /// Earliest and latest timestamps, `None` for an empty log
    pub span: Option<(NaiveDateTime, NaiveDateTime)>,
}

impl LogSummary {
    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        let span = match self.span {
            Some((first, last)) => format!(
                "{} .. {} ({} days)",
                format_timestamp(&first),
                format_timestamp(&last),
                (last - first).num_days()
            ),
            None => "empty".to_string(),
        };

        format!(
            "{} rows, {} units, {} distinct events, span {}",
            self.rows, self.units, self.distinct_events, span
        )
    }
}

/// Check that records are in log order and summarize them
///
/// **Public** - used by the validate command
///
/// # Errors
/// * `LogError::OutOfOrder` - first row (1-based file line) that sorts before its predecessor
pub fn validate_event_log(records: &[EventRecord]) -> Result<LogSummary, LogError> {
    for (index, pair) in records.windows(2).enumerate() {
        if pair[0].log_order(&pair[1]) == Ordering::Greater {
            // header is line 1, pair[1] is data row index + 1
            return Err(LogError::OutOfOrder {
                line: index as u64 + 3,
            });
        }
    }

    Ok(summarize(records))
}

/// Summary statistics without order checks
pub fn summarize(records: &[EventRecord]) -> LogSummary {
    let units: BTreeSet<&str> = records.iter().map(|r| r.unit.as_str()).collect();
    let events: BTreeSet<&str> = records.iter().map(|r| r.event.as_str()).collect();

    let first = records.iter().map(|r| r.timestamp).min();
    let last = records.iter().map(|r| r.timestamp).max();

    LogSummary {
        rows: records.len(),
        units: units.len(),
        distinct_events: events.len(),
        span: first.zip(last),
    }
}

/// Events that are not part of `vocabulary`, in first-seen order
pub fn unknown_events<'a, S: AsRef<str>>(
    records: &'a [EventRecord],
    vocabulary: &[S],
) -> Vec<&'a str> {
    let known: BTreeSet<&str> = vocabulary.iter().map(|s| s.as_ref()).collect();
    let mut unknown: Vec<&str> = Vec::new();

    for record in records {
        let event = record.event.as_str();
        if !known.contains(event) && !unknown.contains(&event) {
            unknown.push(event);
        }
    }

    unknown
}
