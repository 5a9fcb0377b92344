//! Process graph derived from an event log.
//!
//! Downstream viewers render an event log as a directly-follows graph;
//! this module builds that graph so it can be exported as JSON.

pub mod builder;

pub use builder::{build_process_graph, GraphEdge, GraphNode, ProcessGraph};
