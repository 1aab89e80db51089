//! Binary trace encoding and decoding.
//!
//! This module handles:
//! - The fixed 16-byte record layout
//! - Reading records back from a binary trace

pub mod reader;
pub mod record;

// Re-export main types
pub use reader::{read_trace_file, RecordReader};
pub use record::TraceRecord;
