//! Configuration and constants for the generator and CLI.

/// Default vocabulary of process stages
pub const DEFAULT_EVENT_TYPES: &[&str] = &[
    "Order Received",
    "Processing",
    "Packaging",
    "Quality Check",
    "Dispatched",
    "In Transit",
    "Customs Clearance",
    "Warehouse Arrival",
    "Out for Delivery",
    "Delivered",
];

/// Default target row count
pub const DEFAULT_NUM_LINES: usize = 20_000;

/// Default output destination
pub const DEFAULT_OUTPUT_FILE: &str = "generated_events_logs.csv";

/// Header row of every event log, in column order
pub const CSV_HEADER: [&str; 3] = ["unitName", "eventName", "eventStartDate"];

/// Fixed timestamp format (24-hour clock, zero-padded)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Prefix of generated unit identifiers ("Unit_1", "Unit_2", ...)
pub const UNIT_PREFIX: &str = "Unit_";

/// One unit is allocated per this many requested rows (plus one)
pub const ROWS_PER_UNIT_DIVISOR: usize = 10;

// Sampling rules
// A unit replays one of its own past events with REPEAT_PROBABILITY,
// and its clock steps back (rework) with REWORK_PROBABILITY.
pub const REPEAT_PROBABILITY: f64 = 0.2;
pub const REWORK_PROBABILITY: f64 = 0.1;

/// Upper bound (inclusive) of the random start offset before "now"
pub const MAX_INITIAL_OFFSET_DAYS: i64 = 30;

// Clock step bounds in days, inclusive on both ends
pub const MIN_STEP_DAYS: i64 = 1;
pub const MAX_STEP_DAYS: i64 = 5;

// Environment variable fallbacks for the generate command
pub const ENV_NUM_LINES: &str = "EVENT_LOG_SYNTH_NUM_LINES";
pub const ENV_OUTPUT: &str = "EVENT_LOG_SYNTH_OUTPUT";
pub const ENV_SEED: &str = "EVENT_LOG_SYNTH_SEED";
