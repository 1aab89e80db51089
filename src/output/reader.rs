//! Streaming reader for binary trace files.

use super::record::TraceRecord;
use crate::utils::config::RECORD_SIZE;
use crate::utils::error::DecodeError;
use log::debug;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Iterator over the records of a binary trace
///
/// Yields one `Result` per record and stops after the first error.
pub struct RecordReader<R> {
    inner: R,
    offset: u64,
    done: bool,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            offset: 0,
            done: false,
        }
    }

    /// Byte offset of the next record
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Fill `buf` as far as the source allows, returning the byte count
    fn fill(&mut self, buf: &mut [u8; RECORD_SIZE]) -> io::Result<usize> {
        let mut filled = 0;
        while filled < RECORD_SIZE {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = Result<TraceRecord, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = [0u8; RECORD_SIZE];
        let result = match self.fill(&mut buf) {
            Ok(0) => {
                self.done = true;
                return None;
            }
            Ok(RECORD_SIZE) => TraceRecord::from_bytes(&buf, self.offset),
            Ok(len) => Err(DecodeError::Truncated {
                offset: self.offset,
                len,
            }),
            Err(e) => Err(DecodeError::Io(e)),
        };

        match result {
            Ok(record) => {
                self.offset += RECORD_SIZE as u64;
                Some(Ok(record))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Open a binary trace file for decoding
///
/// **Public** - used by the inspect command and tests
pub fn read_trace_file(
    input_path: impl AsRef<Path>,
) -> Result<RecordReader<BufReader<File>>, DecodeError> {
    let input_path = input_path.as_ref();

    debug!("Reading binary trace from: {}", input_path.display());

    let file = File::open(input_path)?;
    Ok(RecordReader::new(BufReader::new(file)))
}
