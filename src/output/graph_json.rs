//! JSON writer for process graphs.

use super::fs::{file_size, prepare_output_path};
use crate::graph::ProcessGraph;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a process graph to a pretty-printed JSON file
///
/// **Public** - main entry point for graph output
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
pub fn write_graph(graph: &ProcessGraph, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing graph to: {}", output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, graph)
        .map_err(OutputError::SerializationFailed)?;
    writer.flush().map_err(OutputError::WriteFailed)?;

    info!("Graph written successfully ({} bytes)", file_size(output_path));

    Ok(())
}

/// Read a process graph back from JSON
///
/// # Errors
/// * `OutputError::ReadFailed` - File cannot be opened
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_graph(input_path: impl AsRef<Path>) -> Result<ProcessGraph, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading graph from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::ReadFailed)?;
    let graph = serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    Ok(graph)
}
