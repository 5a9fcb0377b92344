//! Directly-follows graph construction from an event log.
//!
//! Nodes are distinct event names. An edge `a -> b` is recorded every time
//! event `b` directly follows event `a` within the same unit.
//!
//! Example: rows `U1:A, U1:B, U2:A, U2:B` produce nodes `[A, B]` and a
//! single edge `A -> B` with count 2.

use crate::generator::EventRecord;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A graph node (one per distinct event name)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
}

/// A directly-follows edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,

    /// Number of times this transition occurs across all units
    pub count: u64,
}

/// Graph over the event vocabulary
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl ProcessGraph {
    /// Total transitions (sum of edge counts)
    pub fn transition_count(&self) -> u64 {
        self.edges.iter().map(|e| e.count).sum()
    }

    /// Edges that start and end on the same event (loops)
    pub fn self_loops(&self) -> impl Iterator<Item = &GraphEdge> {
        self.edges.iter().filter(|e| e.from == e.to)
    }
}

/// Build a directly-follows graph from records in log order
///
/// **Public** - main entry point for graph building
///
/// # Algorithm
/// 1. Walk records in order
/// 2. Register each non-empty event name as a node (first-seen order)
/// 3. When the previous record has the same unit, count `previous -> current`
///
/// Records with an empty event name are skipped as nodes but still act as
/// the predecessor of the next record, so no edge can start from an empty name.
pub fn build_process_graph(records: &[EventRecord]) -> ProcessGraph {
    debug!("Building process graph from {} records", records.len());

    let mut graph = ProcessGraph::default();
    let mut seen_nodes: HashSet<&str> = HashSet::new();
    let mut edge_index: HashMap<(&str, &str), usize> = HashMap::new();

    for (i, current) in records.iter().enumerate() {
        if current.event.is_empty() {
            continue;
        }

        if seen_nodes.insert(current.event.as_str()) {
            graph.nodes.push(GraphNode {
                id: current.event.clone(),
            });
        }

        let Some(previous) = i.checked_sub(1).map(|p| &records[p]) else {
            continue;
        };

        if previous.unit != current.unit || previous.event.is_empty() {
            continue;
        }

        let key = (previous.event.as_str(), current.event.as_str());
        match edge_index.get(&key) {
            Some(&idx) => graph.edges[idx].count += 1,
            None => {
                edge_index.insert(key, graph.edges.len());
                graph.edges.push(GraphEdge {
                    from: previous.event.clone(),
                    to: current.event.clone(),
                    count: 1,
                });
            }
        }
    }

    debug!(
        "Built graph: {} nodes, {} edges",
        graph.nodes.len(),
        graph.edges.len()
    );

    graph
}
