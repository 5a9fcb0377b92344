//! Inspection of existing event logs: order checks and summaries.

pub mod validate;

pub use validate::{summarize, unknown_events, validate_event_log, LogSummary};
