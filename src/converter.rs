//! Lackey text trace to binary trace conversion.
//!
//! The converter streams its source one line at a time and writes each
//! record as soon as its line is parsed. Nothing beyond the current line
//! is held in memory.

use crate::output::TraceRecord;
use crate::parser::{parse_line, AccessType, TraceLine};
use crate::utils::error::ConvertError;
use log::{debug, info, warn};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Counters collected during one conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub lines_read: u64,
    pub comment_lines: u64,
    pub records_written: u64,
    pub instruction_reads: u64,
    pub data_reads: u64,
    pub data_writes: u64,
    /// `M` lines, dropped because the record format has no modify kind
    pub modify_skipped: u64,
    pub unrecognized_skipped: u64,
}

impl ConversionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a record of the given type
    pub fn add_record(&mut self, access_type: AccessType) {
        self.records_written += 1;
        match access_type {
            AccessType::InstructionRead => self.instruction_reads += 1,
            AccessType::DataRead => self.data_reads += 1,
            AccessType::DataWrite => self.data_writes += 1,
            AccessType::DataModify => {}
        }
    }

    pub fn lines_skipped(&self) -> u64 {
        self.comment_lines + self.modify_skipped + self.unrecognized_skipped
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} lines, {} records (I={}, L={}, S={}), {} comments, {} modify skipped, {} unrecognized",
            self.lines_read,
            self.records_written,
            self.instruction_reads,
            self.data_reads,
            self.data_writes,
            self.comment_lines,
            self.modify_skipped,
            self.unrecognized_skipped,
        )
    }
}

/// Convert a lackey trace to binary records
///
/// **Public** - main entry point for conversion
///
/// # Arguments
/// * `source` - Lackey text, read line by line
/// * `sink` - Destination for the 16-byte records
///
/// # Returns
/// Statistics for the converted trace
///
/// # Errors
/// * `ConvertError::MalformedLine` - first line that cannot be parsed; records
///   for all earlier lines have already been written to `sink`
/// * `ConvertError::Io` - reading `source` or writing `sink` failed
///
/// # Example
/// ```ignore
/// let input = "I  04a83f3c,4\n";
/// let mut output = Vec::new();
/// convert(input.as_bytes(), &mut output)?;
/// assert_eq!(output.len(), 16);
/// ```
pub fn convert<R: BufRead, W: Write>(
    source: R,
    mut sink: W,
) -> Result<ConversionStats, ConvertError> {
    let mut stats = ConversionStats::new();

    for (index, line) in source.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        stats.lines_read += 1;

        match parse_line(&line, line_number)? {
            TraceLine::Comment => stats.comment_lines += 1,
            TraceLine::Unrecognized => {
                warn!("Line {}: unrecognized access type, skipping: {:?}", line_number, line);
                stats.unrecognized_skipped += 1;
            }
            TraceLine::Access(access) => match TraceRecord::from_access(&access) {
                Some(record) => {
                    record.write_to(&mut sink)?;
                    stats.add_record(access.access_type);
                }
                None => stats.modify_skipped += 1,
            },
        }
    }

    debug!("Conversion finished: {}", stats.summary());

    Ok(stats)
}

/// Convert a lackey trace file into a binary trace file
///
/// **Public** - file-based wrapper around `convert`
///
/// # Arguments
/// * `input_path` - Lackey log to read
/// * `output_path` - Binary trace to create (missing parent directories are created)
///
/// # Errors
/// * `ConvertError::InvalidPath` - output path is empty, is a directory, or
///   its parent cannot be created
/// * `ConvertError::Io` - input cannot be opened or output cannot be written
/// * `ConvertError::MalformedLine` - as for `convert`; the output file keeps
///   the records written before the failing line
pub fn convert_file(
    input_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
) -> Result<ConversionStats, ConvertError> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    info!("Converting {} -> {}", input_path.display(), output_path.display());

    let source = BufReader::new(File::open(input_path)?);

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                ConvertError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let mut sink = BufWriter::new(File::create(output_path)?);

    let result = convert(source, &mut sink);

    // Persist what was written even when a later line was malformed
    match result {
        Ok(stats) => {
            sink.flush()?;
            info!(
                "Wrote {} records ({} bytes) to {}",
                stats.records_written,
                calculate_file_size(output_path),
                output_path.display()
            );
            Ok(stats)
        }
        Err(ConvertError::MalformedLine(e)) => {
            sink.flush()?;
            Err(ConvertError::MalformedLine(e))
        }
        Err(e) => Err(e),
    }
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), ConvertError> {
    if path.as_os_str().is_empty() {
        return Err(ConvertError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(ConvertError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}
