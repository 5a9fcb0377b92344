//! CSV event-log writer and reader.
//!
//! Layout: header `unitName,eventName,eventStartDate`, then one row per
//! record. Quoting follows standard CSV rules (via the `csv` crate), so a
//! label containing a comma or quote survives a round trip.

use super::fs::{file_size, prepare_output_path};
use crate::generator::{format_timestamp, parse_timestamp, EventRecord};
use crate::utils::config::CSV_HEADER;
use crate::utils::error::{LogError, OutputError};
use log::{debug, info};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

/// Raw row as it appears in the file
#[derive(Debug, Deserialize)]
struct RawEventRow {
    #[serde(rename = "unitName")]
    unit_name: String,
    #[serde(rename = "eventName")]
    event_name: String,
    #[serde(rename = "eventStartDate")]
    event_start_date: String,
}

/// Write an event log to a file, creating or overwriting it
///
/// **Public** - main entry point for CSV output
///
/// # Arguments
/// * `records` - Records in the order they should appear
/// * `output_path` - Destination file
///
/// # Errors
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
/// * `OutputError::WriteFailed` / `OutputError::Csv` - I/O error during write
///
/// A failed write may leave a partial file behind; nothing is cleaned up.
pub fn write_event_logs(
    records: &[EventRecord],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} rows to: {}", records.len(), output_path.display());

    prepare_output_path(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;

    write_event_logs_to(records, BufWriter::new(file))?;

    info!("Event log written successfully ({} bytes)", file_size(output_path));

    Ok(())
}

/// Write an event log to any writable sink
///
/// **Public** - used for files and in-memory buffers alike
pub fn write_event_logs_to<W: Write>(records: &[EventRecord], sink: W) -> Result<(), OutputError> {
    let mut writer = csv::Writer::from_writer(sink);

    writer.write_record(CSV_HEADER)?;

    for record in records {
        let timestamp = format_timestamp(&record.timestamp);
        writer.write_record([record.unit.as_str(), record.event.as_str(), timestamp.as_str()])?;
    }

    writer.flush().map_err(OutputError::WriteFailed)?;

    Ok(())
}

/// Read an event log from a file
///
/// **Public** - used by the graph and validate commands
///
/// # Errors
/// * `LogError::Read` - File cannot be opened or CSV is malformed
/// * `LogError::InvalidHeader` - Header differs from `unitName,eventName,eventStartDate`
/// * `LogError::InvalidTimestamp` - A date is not `YYYY-MM-DD HH:MM:SS`
pub fn read_event_logs(input_path: impl AsRef<Path>) -> Result<Vec<EventRecord>, LogError> {
    let input_path = input_path.as_ref();

    debug!("Reading event log from: {}", input_path.display());

    let file = File::open(input_path).map_err(|e| LogError::Read(e.into()))?;
    let records = read_event_logs_from(file)?;

    debug!("Event log loaded: {} rows", records.len());

    Ok(records)
}

/// Read an event log from any readable source
///
/// **Public** - counterpart of `write_event_logs_to`
pub fn read_event_logs_from<R: Read>(source: R) -> Result<Vec<EventRecord>, LogError> {
    let mut reader = csv::Reader::from_reader(source);

    let headers = reader.headers()?.clone();
    if headers.iter().ne(CSV_HEADER.iter().copied()) {
        return Err(LogError::InvalidHeader {
            expected: CSV_HEADER.join(","),
            found: headers.iter().collect::<Vec<_>>().join(","),
        });
    }

    let mut records = Vec::new();

    for (index, row) in reader.deserialize::<RawEventRow>().enumerate() {
        let row = row?;
        // line 1 is the header
        let line = index as u64 + 2;

        let timestamp = parse_timestamp(&row.event_start_date).ok_or_else(|| {
            LogError::InvalidTimestamp {
                line,
                value: row.event_start_date.clone(),
            }
        })?;

        records.push(EventRecord::new(row.unit_name, row.event_name, timestamp));
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    fn create_test_records() -> Vec<EventRecord> {
        let day = |d| {
            NaiveDate::from_ymd_opt(2025, 1, d)
                .unwrap()
                .and_hms_opt(10, 15, 30)
                .unwrap()
        };
        vec![
            EventRecord::new("Unit_1", "Order Received", day(2)),
            EventRecord::new("Unit_1", "Processing", day(4)),
            EventRecord::new("Unit_2", "Order Received", day(1)),
        ]
    }

    #[test]
    fn test_write_to_buffer_layout() {
        let mut buffer = Vec::new();
        write_event_logs_to(&create_test_records(), &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "unitName,eventName,eventStartDate\n\
             Unit_1,Order Received,2025-01-02 10:15:30\n\
             Unit_1,Processing,2025-01-04 10:15:30\n\
             Unit_2,Order Received,2025-01-01 10:15:30\n"
        );
    }

    #[test]
    fn test_write_empty_is_header_only() {
        let mut buffer = Vec::new();
        write_event_logs_to(&[], &mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "unitName,eventName,eventStartDate\n");
    }

    #[test]
    fn test_labels_with_delimiters_are_quoted() {
        let ts = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
        let records = vec![EventRecord::new("Unit_1", "Pick, \"pack\"", ts)];

        let mut buffer = Vec::new();
        write_event_logs_to(&records, &mut buffer).unwrap();
        let text = String::from_utf8(buffer.clone()).unwrap();
        assert!(text.contains("\"Pick, \"\"pack\"\"\""));

        let loaded = read_event_logs_from(buffer.as_slice()).unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_write_and_read_file() {
        let records = create_test_records();
        let temp_file = NamedTempFile::new().unwrap();

        write_event_logs(&records, temp_file.path()).unwrap();
        let loaded = read_event_logs(temp_file.path()).unwrap();

        assert_eq!(loaded, records);
    }

    #[test]
    fn test_read_rejects_wrong_header() {
        let input = "unit,event,date\nUnit_1,A,2025-01-02 10:15:30\n";
        let result = read_event_logs_from(input.as_bytes());
        assert!(matches!(result, Err(LogError::InvalidHeader { .. })));
    }

    #[test]
    fn test_read_rejects_bad_timestamp() {
        let input = "unitName,eventName,eventStartDate\nUnit_1,A,2025-01-02 10:15:30\nUnit_1,B,yesterday\n";
        match read_event_logs_from(input.as_bytes()) {
            Err(LogError::InvalidTimestamp { line, value }) => {
                assert_eq!(line, 3);
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/events.csv");

        write_event_logs(&create_test_records(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }
}
