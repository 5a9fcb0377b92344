//! Event Log Synth
//!
//! Synthetic event-log generation for process-mining and
//! workflow-analysis tooling.
//!
//! Units (orders, parts, ...) move through a vocabulary of process stages;
//! each unit keeps its own clock, sometimes repeats a past stage and
//! sometimes steps back in time (rework). The result is a CSV log with
//! `unitName,eventName,eventStartDate` rows sorted by unit and time.
//!
//! ## Getting Started
//!
//! ```bash
//! event-log-synth generate --num-lines 20000 --output generated_events_logs.csv
//! event-log-synth graph --input generated_events_logs.csv --output process_graph.json
//! ```
//!
//! As a library:
//!
//! ```ignore
//! use event_log_synth::generator::GeneratorConfig;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let records = GeneratorConfig::new().with_num_lines(100).generate(&mut rng)?;
//! event_log_synth::output::write_event_logs(&records, "events.csv")?;
//! ```

pub mod commands;
pub mod generator;
pub mod graph;
pub mod inspect;
pub mod output;
pub mod utils;
