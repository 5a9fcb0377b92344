//! Graph command implementation.
//!
//! Reads a CSV event log, builds its directly-follows graph and writes it as JSON.

use super::models::GraphArgs;
use crate::graph::build_process_graph;
use crate::output::{read_event_logs, write_graph};
use anyhow::{Context, Result};
use log::info;

/// Execute the graph command
///
/// **Public** - main entry point called from main.rs
pub fn execute_graph(args: &GraphArgs) -> Result<()> {
    info!("Reading event log: {}", args.input.display());

    let records = read_event_logs(&args.input)
        .with_context(|| format!("Failed to read event log {}", args.input.display()))?;

    let graph = build_process_graph(&records);

    info!(
        "Process graph: {} nodes, {} edges, {} transitions",
        graph.nodes.len(),
        graph.edges.len(),
        graph.transition_count()
    );

    write_graph(&graph, &args.output).context("Failed to write process graph")?;

    println!("✓ Graph written to: {}", args.output.display());

    Ok(())
}
