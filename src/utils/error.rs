//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur during trace generation
#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Event type list is empty: at least one event label is required")]
    EmptyEventTypes,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to read file: {0}")]
    ReadFailed(std::io::Error),

    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while reading or validating an existing event log
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to read event log: {0}")]
    Read(#[from] csv::Error),

    #[error("Invalid header: expected '{expected}', found '{found}'")]
    InvalidHeader { expected: String, found: String },

    #[error("Invalid timestamp on line {line}: '{value}'")]
    InvalidTimestamp { line: u64, value: String },

    #[error("Rows out of order on line {line}: expected (unitName, eventStartDate) ascending")]
    OutOfOrder { line: u64 },
}
